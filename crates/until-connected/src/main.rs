use std::str::FromStr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use until_connected_core::{CfgOverrides, Poller, Target};

/// Wait until a TCP endpoint accepts connections.
#[derive(Parser, Debug)]
#[command(name = "until-connected", version, about)]
struct Cli {
    /// Port number or URL to connect to
    #[arg(value_parser = Target::from_str)]
    target: Option<Target>,

    /// Configuration file, layered below UNTIL_CONNECTED_* variables
    #[arg(long, short = 'c', env = "UNTIL_CONNECTED_CONFIG_FILE")]
    config: Option<String>,

    /// Total number of connection attempts
    #[arg(long, short = 'r')]
    max_retries: Option<u32>,

    /// Delay between attempts
    #[arg(long, short = 'i', value_name = "MS")]
    interval: Option<u64>,

    /// Timeout of a single attempt
    #[arg(long, short = 't', value_name = "MS")]
    timeout: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> CfgOverrides {
        CfgOverrides::builder()
            .maybe_target(self.target.clone())
            .maybe_max_retries(self.max_retries)
            .maybe_connection_interval(self.interval)
            .maybe_connect_timeout(self.timeout)
            .build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let poller = Poller::builder()
        .with_config_file(cli.config.clone())
        .with_overrides(cli.overrides())
        .prepare()?;

    poller.run().await?;

    info!("Connection established to {}", poller.target());

    Ok(())
}

fn env_filter() -> EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{}=debug,until_connected_core=debug",
            env!("CARGO_CRATE_NAME")
        )
        .into()
    })
}
