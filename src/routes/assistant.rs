use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::relay::OpaquePayload;
use crate::services::relay::WorkflowRelay;

/// Relays the chatbot message to the workflow webhook and echoes its answer.
#[post("/v1/assistant")]
pub async fn api_v1_assistant(body: web::Bytes, relay: web::Data<WorkflowRelay>) -> impl Responder {
    match relay.forward(OpaquePayload::from(body.as_ref())).await {
        Ok(answer) => {
            let status = StatusCode::from_u16(answer.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut response = HttpResponse::build(status);
            if let Some(content_type) = answer.content_type {
                response.content_type(content_type);
            }
            response.body(answer.body)
        }
        Err(_) => HttpResponse::BadGateway().finish(),
    }
}
