mod backend;
mod catalog;
mod config;
mod console;
mod models;
mod views;

use anyhow::Context;
use backend::{PropertyBackend, WebhookBackend};
use catalog::PropertyDatabase;
use clap::Parser;
use config::ApiConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Manage the Imperial Estates property catalog from the terminal
#[derive(Debug, Parser)]
#[command(name = "property-desk", version)]
struct Cli {
    /// Relay prefixed to every endpoint URL
    #[arg(long, env = "PROPERTY_DESK_RELAY")]
    relay: Option<String>,

    /// Call the endpoints directly instead of through the relay; wins over --relay
    #[arg(long)]
    no_relay: bool,

    /// Webhook returning every property
    #[arg(long, env = "PROPERTY_DESK_LIST_URL")]
    list_url: Option<String>,

    /// Webhook receiving new properties
    #[arg(long, env = "PROPERTY_DESK_CREATE_URL")]
    create_url: Option<String>,

    /// Webhook receiving edited properties
    #[arg(long, env = "PROPERTY_DESK_UPDATE_URL")]
    update_url: Option<String>,

    /// Webhook receiving `{"id": ...}` deletions
    #[arg(long, env = "PROPERTY_DESK_DELETE_URL")]
    delete_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "PROPERTY_DESK_TIMEOUT")]
    timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> ApiConfig {
        let mut config = ApiConfig::default();
        if self.no_relay {
            config.relay = None;
        } else if let Some(relay) = self.relay {
            config.relay = Some(relay);
        }
        if let Some(url) = self.list_url {
            config.list_url = url;
        }
        if let Some(url) = self.create_url {
            config.create_url = url;
        }
        if let Some(url) = self.update_url {
            config.update_url = url;
        }
        if let Some(url) = self.delete_url {
            config.delete_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the rendered views
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();

    info!("🏠 Imperial Estates - Property Database");
    info!("Relay: {}", config.relay.as_deref().unwrap_or("(none)"));
    debug!("{:?}", config);

    let backend = WebhookBackend::new(config).context("Failed to create webhook backend")?;
    info!("Connecting to {}", backend.backend_name());

    let mut db = PropertyDatabase::new(backend);
    db.load_properties().await;

    console::run(&mut db).await?;

    info!("👋 Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "property-desk",
            "--no-relay",
            "--list-url",
            "http://localhost:5678/webhook/list",
            "--timeout",
            "5",
        ]);
        let config = cli.into_config();

        assert_eq!(config.relay, None);
        assert_eq!(config.list_url, "http://localhost:5678/webhook/list");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.create_url, ApiConfig::default().create_url);
    }

    #[test]
    fn no_relay_wins_over_a_configured_relay() {
        std::env::set_var("PROPERTY_DESK_RELAY", "http://127.0.0.1:9/");
        let from_env = Cli::try_parse_from(["property-desk", "--no-relay"]);
        std::env::remove_var("PROPERTY_DESK_RELAY");
        assert_eq!(from_env.unwrap().into_config().relay, None);

        let both = Cli::try_parse_from([
            "property-desk",
            "--relay",
            "http://127.0.0.1:9/",
            "--no-relay",
        ])
        .unwrap();
        assert_eq!(both.into_config().relay, None);
    }
}
