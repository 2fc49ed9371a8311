use pawtner::configuration::get_configuration;
use pawtner::startup::build;
use pawtner::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("pawtner".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let app = build(config)?;
    tracing::info!("Listening on port {}", app.port());
    app.run().await?;

    Ok(())
}
