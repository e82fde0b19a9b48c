mod payload;

use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::new_submission::NewSubmission;
use crate::domain::submission::Submission;
use crate::store::{StoreError, SubmissionStore};
use crate::utils::error_helpers::{error_chain_fmt, json_error};

pub use payload::{InboundSubmission, SubmissionFields};

#[derive(thiserror::Error)]
pub enum SubmitError {
    /// The reason is logged; clients always get the same message.
    #[error("Both name and email are required")]
    ValidationError(String),

    #[error("Malformed request body: {0}")]
    MalformedPayload(String),

    #[error("Database error: {0}")]
    StoreError(#[from] StoreError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::ValidationError(_) | SubmitError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            SubmitError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), &self.to_string())
    }
}

#[derive(serde::Serialize)]
struct SubmitResponse<'a> {
    message: &'a str,
    id: String,
    data: Submission,
}

#[tracing::instrument(
    name = "Adding a new submission",
    skip(payload, store),
    fields(
        submitter_name = tracing::field::Empty,
        submitter_email = tracing::field::Empty,
    )
)]
pub async fn submit(
    payload: InboundSubmission,
    store: web::Data<dyn SubmissionStore>,
) -> Result<HttpResponse, SubmitError> {
    let new_submission: NewSubmission = payload.try_into().map_err(|reason: String| {
        tracing::warn!("Rejected submission: {}", reason);
        SubmitError::ValidationError(reason)
    })?;

    let span = tracing::Span::current();
    span.record(
        "submitter_name",
        &tracing::field::display(new_submission.name.as_ref()),
    );
    span.record(
        "submitter_email",
        &tracing::field::display(new_submission.email.as_ref()),
    );

    let id = store.insert_one(&new_submission).await?;
    tracing::info!(%id, "Stored new submission");

    Ok(HttpResponse::Ok().json(SubmitResponse {
        message: "Data submitted successfully",
        id,
        data: Submission::from(&new_submission),
    }))
}
