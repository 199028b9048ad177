//! # rootwalk
//!
//! Iterative DNS resolver served over HTTP.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use rootwalk_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS resolver that walks delegations from the root")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address for the web server
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Fixed IPv4 address of the root server, skipping the bootstrap lookup
    #[arg(long)]
    root_server_address: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.web_port,
        log_level: cli.log_level,
        root_server_address: cli.root_server_address,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        root_server = %config.resolver.root_server,
        protocol = %config.resolver.protocol,
        "Starting rootwalk"
    );

    let services = di::DnsServices::new(&config);
    let use_cases = di::UseCases::new(&services);

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(
        web_addr,
        use_cases.into_app_state(),
        &config.server.cors_allowed_origins,
    )
    .await
}
