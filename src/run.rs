use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::domain::application::ServiceMetadata;
use crate::routes::health::health_check;
use crate::routes::home::home;
use crate::routes::submissions::{count_submissions, list_submissions};
use crate::routes::submit::submit;
use crate::store::SubmissionStore;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn SubmissionStore>,
    service: ServiceMetadata,
) -> Result<Server, std::io::Error> {
    let store: web::Data<dyn SubmissionStore> = web::Data::from(store);
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        // Cross-origin requests are accepted from anywhere.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health", web::get().to(health_check))
            .route("/api", web::get().to(list_submissions))
            .route("/api/count", web::get().to(count_submissions))
            .route("/submit", web::post().to(submit))
            .app_data(store.clone())
            .app_data(service.clone())
    })
    .listen(listener)?
    .run())
}
