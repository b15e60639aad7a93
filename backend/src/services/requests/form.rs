use actix_web::{HttpResponse, Responder};
use chrono::Local;
use common::requests::FormOptions;

/// Handler for `GET /api/requests/form`.
pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(FormOptions::for_date(Local::now().date_naive()))
}
