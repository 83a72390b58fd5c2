//! Actix-web handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::types::{GarageId, TypeConstraintError};
use crate::repository::DossierListQuery;

pub mod assistant;
pub mod client;
pub mod dossier;
pub mod local;
pub mod main;
pub mod planning;

/// Optional `?garage_id=` filter accepted by the listing routes.
#[derive(Debug, Default, Deserialize)]
pub struct GarageFilter {
    pub garage_id: Option<i32>,
}

impl GarageFilter {
    pub fn garage(&self) -> Result<Option<GarageId>, TypeConstraintError> {
        self.garage_id.map(GarageId::new).transpose()
    }

    pub fn to_query(&self) -> Result<DossierListQuery, TypeConstraintError> {
        let query = DossierListQuery::new();
        Ok(match self.garage()? {
            Some(garage_id) => query.garage(garage_id),
            None => query,
        })
    }
}

/// Maps a flash message level onto the Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context with the alerts and navigation entry every page needs.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
