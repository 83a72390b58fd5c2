use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{GarageFilter, base_context, render_template};
use crate::services::dossier as dossier_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<GarageFilter>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = match params.to_query() {
        Ok(query) => query,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match dossier_service::list_dossier_cards(repo.get_ref(), &query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("cards", &data.cards);
            context.insert("incomplete", &data.incomplete);
            render_template(&tera, "main/index.html", &context)
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
