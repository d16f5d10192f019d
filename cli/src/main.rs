//! udtask - UrbanCode Deploy udclient steps for build pipelines

use clap::Parser;
use tracing_subscriber::EnvFilter;
use udtask_cli::application::services::context::debug_enabled;
use udtask_cli::cli::Cli;
use udtask_cli::infra::host::EnvTaskHost;

const LOG_ENV: &str = "UDTASK_LOG";

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug || debug_enabled(&EnvTaskHost::from_env()));
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
