use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Local;
use tera::Tera;

use crate::dto::planning::PlanningQuery;
use crate::forms::planning::DropForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, planning as planning_service};

#[get("/planning")]
pub async fn show_planning(
    params: web::Query<PlanningQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let today = Local::now().date_naive();

    match planning_service::load_week(repo.get_ref(), params.into_inner(), today) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "planning");
            context.insert("days", &data.days);
            context.insert("previous_week", &data.previous_week);
            context.insert("next_week", &data.next_week);
            render_template(&tera, "planning/index.html", &context)
        }
        Err(ServiceError::TypeConstraint(message)) => HttpResponse::BadRequest().body(message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[post("/v1/planning/drop")]
pub async fn api_v1_planning_drop(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DropForm>,
) -> impl Responder {
    match planning_service::drop_dossier(repo.get_ref(), form) {
        Ok(dossier) => HttpResponse::Ok().json(dossier),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
