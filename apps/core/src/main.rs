// Prompty native-messaging host entry point
// Reads framed requests on stdin, answers on stdout, logs to stderr.

use anyhow::Context;
use prompty_core::{config::HostConfig, host, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HostConfig::from_env().context("Failed to load host configuration")?;
    telemetry::init(&config).context("Failed to initialize logging")?;

    info!("Starting Prompty host v{}", env!("CARGO_PKG_VERSION"));

    host::run_host(tokio::io::stdin(), tokio::io::stdout(), &config)
        .await
        .context("Host loop failed")?;

    info!("Prompty host stopped");
    Ok(())
}
