use actix_web::{HttpResponse, Responder, delete, get, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::domain::types::DossierId;
use crate::dto::dossier::DeleteResponse;
use crate::repository::DieselRepository;
use crate::routes::{GarageFilter, redirect};
use crate::services::dossier as dossier_service;

#[post("/dossier/{dossier_id}/delete")]
pub async fn delete_dossier(
    dossier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(dossier_id) = DossierId::new(dossier_id.into_inner()) else {
        FlashMessage::error("Unknown dossier.").send();
        return redirect("/");
    };

    match dossier_service::delete_dossier(repo.get_ref(), dossier_id) {
        Ok(_) => FlashMessage::success(format!("Dossier #{dossier_id} deleted.")).send(),
        Err(err) => FlashMessage::error(format!("Could not delete dossier: {err}")).send(),
    }
    redirect("/")
}

#[get("/v1/dossiers")]
pub async fn api_v1_dossiers(
    params: web::Query<GarageFilter>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.to_query() {
        Ok(query) => query,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match dossier_service::list_dossiers(repo.get_ref(), &query) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[delete("/v1/dossiers/{dossier_id}")]
pub async fn api_v1_delete_dossier(
    dossier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let dossier_id = match DossierId::new(dossier_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match dossier_service::delete_dossier(repo.get_ref(), dossier_id) {
        Ok(deleted) => HttpResponse::Ok().json(DeleteResponse { deleted }),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
