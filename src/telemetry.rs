use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Dependencies that log through `log` at debug level on every request
/// (TLS handshakes to the store, worker bookkeeping).
const QUIET_TARGETS: [&str; 3] = ["rustls", "actix_server", "mio"];

/// Appends a `warn` cap for each of [`QUIET_TARGETS`] to `filter`.
fn default_directives(filter: &str) -> String {
    QUIET_TARGETS
        .iter()
        .fold(filter.to_string(), |directives, target| {
            format!("{},{}=warn", directives, target)
        })
}

/// Builds the subscriber that writes bunyan-formatted JSON lines to `sink`.
///
/// `RUST_LOG` takes precedence over `filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&filter)));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` process-wide and routes `log` records (the MongoDB
/// driver and actix emit some) into it. Fails if called twice.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}
