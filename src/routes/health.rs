use actix_web::{web, HttpResponse};
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::application::ServiceMetadata;
use crate::store::SubmissionStore;

#[derive(serde::Serialize)]
struct HealthReport<'a> {
    status: &'a str,
    service: &'a str,
    database: &'a str,
    timestamp: &'a str,
}

/// Always answers 200. A failed probe is reported in the `database` field,
/// never as an HTTP error.
pub async fn health_check(
    store: web::Data<dyn SubmissionStore>,
    service: web::Data<ServiceMetadata>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let request_span = tracing::info_span!(
        "Checking service health",
        %request_id,
    );

    let database = match store.ping().instrument(request_span.clone()).await {
        Ok(()) => {
            request_span.in_scope(|| tracing::info!("Service is healthy!"));
            "connected"
        }
        Err(e) => {
            request_span.in_scope(|| tracing::warn!("Database ping failed: {:?}", e));
            "disconnected"
        }
    };

    HttpResponse::Ok().json(HealthReport {
        status: "OK",
        service: &service.service_name,
        database,
        timestamp: service.timestamp(),
    })
}
