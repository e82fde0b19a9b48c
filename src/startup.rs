use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::Configuration;
use crate::domain::application::ServiceMetadata;
use crate::run::run;
use crate::store::{MongoSubmissionStore, SubmissionStore};

/// The HTTP server together with the store it owns.
///
/// The store is opened by [`AppServer::build`] and closed once
/// [`AppServer::run_until_stopped`] returns.
pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
    store: Arc<dyn SubmissionStore>,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let store = MongoSubmissionStore::connect(&configuration.database)
            .await
            .context("Failed to create the MongoDB client")?;

        Self::build_with_store(configuration, Arc::new(store))
    }

    pub fn build_with_store(
        configuration: Configuration,
        store: Arc<dyn SubmissionStore>,
    ) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .context("Failed to bind the application listener")?;

        let local_addr = listener.local_addr()?;
        tracing::info!("Starting service on address: {}", local_addr);

        let service = ServiceMetadata {
            service_name: configuration.application.service_name.clone(),
            deployed_at: configuration.application.deployed_at.clone(),
        };

        let address = configuration.application.host;
        let port = local_addr.port();
        let server = run(listener, store.clone(), service)?;

        Ok(Self {
            port,
            address,
            server,
            store,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let outcome = self.server.await;
        self.store.close().await;
        outcome
    }
}
