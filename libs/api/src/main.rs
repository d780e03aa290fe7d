use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use repository::Repository;
use tokio::net::TcpListener;
use toml::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{load_config, load_env};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = load_env()?;
    let conn_string = secrets
        .get("LOCAL_DATABASE_URL")
        .and_then(Value::as_str)
        .context("LOCAL_DATABASE_URL was not found")?;

    let config_name = match secrets.get("CONFIG").and_then(Value::as_str) {
        Some(config) => format!("Config{}.toml", config),
        None => "Config.toml".to_string(),
    };
    let config: Config = load_config(&config_name)?;

    let repository = Repository::new(conn_string).await?;

    let router = serve(repository, &config).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
