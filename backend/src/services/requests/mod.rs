//! # Marketing Request Service Module
//!
//! HTTP boundary between the request form and the intake core. Every route
//! lives under `/api/requests`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/requests`**:
//!     - **Handler**: `submit::process`
//!     - **Description**: Validates a `SubmitRequest`, appends the normalized
//!       record to the record store and answers with a CSV copy of it
//!       (`200`). Rejections come back as `422` with every validation message,
//!       storage failures as `503` with a generic notice.
//!
//! *   **`GET /api/requests/form`**:
//!     - **Handler**: `form::process`
//!     - **Description**: Returns the channel and activity selections, the
//!       default duration and the stored column order as `FormOptions`.

mod artifact;
mod form;
pub(crate) mod submit;

use actix_web::web::{get, post, scope};
use actix_web::{error, web, HttpResponse, Scope};
use common::requests::ValidationErrors;

/// The base path for all marketing request endpoints.
const API_PATH: &str = "/api/requests";

/// Configures and returns the Actix `Scope` for marketing request routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("/form", get().to(form::process))
}

/// JSON extractor settings for this service.
///
/// Bodies that do not parse (unknown channel or activity, wrong types,
/// oversized payloads) are answered with `400` and the parser message in the
/// same `{"errors": [...]}` shape validation failures use.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ValidationErrors {
                errors: vec![err.to_string()],
            };
            error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}
