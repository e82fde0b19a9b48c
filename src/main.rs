use submissions::config::get_configuration;
use submissions::startup::AppServer;
use submissions::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `MONGODB_URI`, `TIMESTAMP` and `RUST_LOG` may come from a `.env` file.
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber(
        "submissions".into(),
        "info".into(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration()?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
