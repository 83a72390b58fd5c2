//! JSON access to the process-local dossier store.

use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::dossier::Dossier;
use crate::domain::types::DossierId;
use crate::repository::memory::DossierStore;

#[get("/v1/local/dossiers")]
pub async fn api_v1_local_dossiers(store: web::Data<DossierStore>) -> impl Responder {
    HttpResponse::Ok().json(store.get_all())
}

#[get("/v1/local/dossiers/{dossier_id}")]
pub async fn api_v1_local_dossier(
    dossier_id: web::Path<i32>,
    store: web::Data<DossierStore>,
) -> impl Responder {
    let dossier_id = match DossierId::new(dossier_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match store.get_by_id(dossier_id) {
        Some(dossier) => HttpResponse::Ok().json(dossier),
        None => HttpResponse::NotFound().finish(),
    }
}

#[post("/v1/local/dossiers")]
pub async fn api_v1_add_local_dossier(
    store: web::Data<DossierStore>,
    web::Json(dossier): web::Json<Dossier>,
) -> impl Responder {
    log::info!("Caching dossier {} locally", dossier.id);
    store.add(dossier.clone());
    HttpResponse::Created().json(dossier)
}
