//! Document build proxy server
//!
//! Serves `POST /api/build`, forwarding uploads to the Nutrient Processor API.

use build_core::constants::API_KEY_ENV_VAR;
use build_core::ProxyConfig;
use build_server::AppState;
use clap::{Arg, Command};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = Command::new("build-server")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Passthrough proxy for Nutrient document conversion")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON configuration file (environment variables still apply)")
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Listen address, overrides configuration")
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_name("PORT")
                .value_parser(clap::value_parser!(u16).range(1..))
                .help("Listen port, overrides configuration")
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = ProxyConfig::from_file(path)?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => ProxyConfig::from_env()?,
    };

    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }

    if config.nutrient.credential().is_none() {
        log::warn!(
            "{} is not set; build requests will fail with 500 until it is configured",
            API_KEY_ENV_VAR
        );
    }

    let state = Arc::new(AppState::from_config(&config)?);
    let app = build_server::router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    log::info!("Forwarding conversions to {}", config.nutrient.base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
