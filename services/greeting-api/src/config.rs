use std::{net::SocketAddr, path::PathBuf};

use config::{ConfigBuilder, Environment, File, builder::AsyncState};
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_GREETING: &str = "Welcome to Docker Lucknow Meetup!";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server_address: SocketAddr,
    pub greeting: String,
    pub tracing_level: Option<String>,
    pub log_format: Option<String>,
}

impl Config {
    /// Defaults, then an optional settings.json next to the manifest, then
    /// environment variables. The service runs with no sources present.
    pub async fn init(cargo_manifest_dir: PathBuf) -> Result<Self, AppError> {
        let cfg = ConfigBuilder::<AsyncState>::default()
            .set_default("server_address", DEFAULT_SERVER_ADDRESS)?
            .set_default("greeting", DEFAULT_GREETING)?
            .add_source(File::from(cargo_manifest_dir.join("settings.json")).required(false))
            .add_source(Environment::default())
            .build()
            .await?;

        Ok(cfg.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_bind_port_3000() {
        let config = Config::init(std::env::temp_dir()).await.unwrap();
        assert_eq!(config.server_address.port(), 3000);
    }

    #[tokio::test]
    async fn defaults_to_undated_greeting() {
        let config = Config::init(std::env::temp_dir()).await.unwrap();
        assert_eq!(config.greeting, DEFAULT_GREETING);
        assert!(config.tracing_level.is_none());
    }

    #[tokio::test]
    async fn settings_file_overrides_defaults() {
        let dir = std::env::temp_dir().join("greeting-api-config-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(
            dir.join("settings.json"),
            r#"{ "server_address": "127.0.0.1:8080", "greeting": "Welcome to Docker Lucknow Meetup - 21st Sept 2024! " }"#,
        )
        .await
        .unwrap();

        let config = Config::init(dir).await.unwrap();
        assert_eq!(config.server_address.port(), 8080);
        assert_eq!(
            config.greeting,
            "Welcome to Docker Lucknow Meetup - 21st Sept 2024! "
        );
    }
}
