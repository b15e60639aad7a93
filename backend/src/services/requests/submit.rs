//! # Marketing Request Submission
//!
//! Provides `POST /api/requests`, the only write path of the service.
//!
//! ## Workflow:
//!
//! 1.  **Validation**: `intake::check` runs every rule on the raw form. Any
//!     failure ends the submission with the full list of messages; nothing is
//!     written.
//!
//! 2.  **Normalization**: the validated form becomes a `MarketingRequest`
//!     stamped with the local submission time.
//!
//! 3.  **Persistence**: the record is appended to the shared `RecordStore`.
//!     The append runs on the blocking pool (`web::block`). A failed append
//!     ends the submission without producing a download.
//!
//! 4.  **Response**: the same record is serialized in memory as header + row
//!     and returned as a CSV attachment, byte-identical to what was stored.

use crate::record_store::{RecordStore, StoreError};
use crate::services::requests::artifact;
use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Local};
use common::intake;
use common::model::marketing_request::MarketingRequest;
use common::requests::{SubmitRequest, ValidationErrors};
use log::{error, info, warn};

/// Shown to the user when the record could not be stored.
pub const SAVE_FAILED: &str = "Could not save your request. Please try again later.";

/// An accepted and stored submission.
#[derive(Debug)]
pub struct Submission {
    pub record: MarketingRequest,
    /// Header + row, as offered for download.
    pub artifact: Vec<u8>,
    pub file_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected with {} validation error(s)", .0.len())]
    Invalid(Vec<String>),
    #[error("failed to persist submission: {0}")]
    Persistence(#[from] StoreError),
    #[error("failed to build the download for a stored submission: {0}")]
    Artifact(#[source] csv::Error),
}

/// Validates, normalizes, stores and serializes one form submission.
pub fn submit(
    store: &dyn RecordStore,
    form: &SubmitRequest,
    submitted_at: DateTime<Local>,
) -> Result<Submission, SubmitError> {
    let record = intake::check(form)
        .map_err(SubmitError::Invalid)?
        .normalize(submitted_at.naive_local());

    store.append(&record)?;

    let artifact = artifact::serialize(&record).map_err(SubmitError::Artifact)?;
    Ok(Submission {
        record,
        artifact,
        file_name: artifact::file_name(submitted_at.timestamp()),
    })
}

/// Actix handler for `POST /api/requests`.
///
/// # Returns
/// - `200 OK` with the CSV download on success.
/// - `422 Unprocessable Entity` with `ValidationErrors` when the form is rejected.
/// - `503 Service Unavailable` when the record could not be stored.
/// - `500 Internal Server Error` when the stored record could not be serialized.
pub(crate) async fn process(
    store: web::Data<dyn RecordStore>,
    payload: web::Json<SubmitRequest>,
) -> HttpResponse {
    let form = payload.into_inner();
    let submitted_at = Local::now();

    let outcome = web::block(move || submit(store.get_ref(), &form, submitted_at)).await;

    match outcome {
        Ok(Ok(submission)) => {
            info!(
                "stored marketing request: channel={} activity={} duration={}..{}",
                submission.record.channel,
                submission.record.activity,
                submission.record.start_date,
                submission.record.end_date
            );
            HttpResponse::Ok()
                .content_type(artifact::CONTENT_TYPE)
                .insert_header(ContentDisposition::attachment(submission.file_name))
                .body(submission.artifact)
        }
        Ok(Err(SubmitError::Invalid(errors))) => {
            warn!("rejected marketing request with {} error(s)", errors.len());
            HttpResponse::UnprocessableEntity().json(ValidationErrors { errors })
        }
        Ok(Err(err @ SubmitError::Persistence(_))) => {
            error!("{err}");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "error": SAVE_FAILED }))
        }
        Ok(Err(err @ SubmitError::Artifact(_))) => {
            error!("{err}");
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": err.to_string() }))
        }
        Err(err) => {
            error!("submission worker failed: {err}");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "error": SAVE_FAILED }))
        }
    }
}
