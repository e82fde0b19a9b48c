use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::store::{StoreError, SubmissionStore};
use crate::utils::error_helpers::{error_chain_fmt, json_error};

#[derive(thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

impl std::fmt::Debug for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for QueryError {
    fn status_code(&self) -> StatusCode {
        match self {
            QueryError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), &self.to_string())
    }
}

#[derive(serde::Serialize)]
struct CountResponse {
    count: u64,
}

#[tracing::instrument(name = "Listing submissions", skip(store))]
pub async fn list_submissions(
    store: web::Data<dyn SubmissionStore>,
) -> Result<HttpResponse, QueryError> {
    let submissions = store.find_all().await?;
    tracing::info!(returned = submissions.len(), "Listed submissions");
    Ok(HttpResponse::Ok().json(submissions))
}

#[tracing::instrument(name = "Counting submissions", skip(store))]
pub async fn count_submissions(
    store: web::Data<dyn SubmissionStore>,
) -> Result<HttpResponse, QueryError> {
    let count = store.count_all().await?;
    Ok(HttpResponse::Ok().json(CountResponse { count }))
}
