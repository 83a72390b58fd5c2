use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{GarageFilter, base_context, render_template};
use crate::services::client as client_service;

#[get("/clients")]
pub async fn show_clients(
    params: web::Query<GarageFilter>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let garage_id = match params.garage() {
        Ok(garage_id) => garage_id,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    let clients = match garage_id {
        Some(garage_id) => match client_service::list_clients(repo.get_ref(), garage_id) {
            Ok(clients) => clients,
            Err(_) => return HttpResponse::InternalServerError().finish(),
        },
        None => Vec::new(),
    };

    let mut context = base_context(&flash_messages, "clients");
    context.insert("garage_id", &garage_id);
    context.insert("clients", &clients);
    render_template(&tera, "clients/index.html", &context)
}

#[get("/v1/clients")]
pub async fn api_v1_clients(
    params: web::Query<GarageFilter>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let garage_id = match params.garage() {
        Ok(Some(garage_id)) => garage_id,
        Ok(None) => return HttpResponse::BadRequest().body("garage_id is required"),
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match client_service::list_clients(repo.get_ref(), garage_id) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
