use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;
use std::{fmt, path::PathBuf};
use uplink::{Credentials, rockblock::DEFAULT_ENDPOINT};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub mail: MailConfig,
    pub uplink: UplinkConfig,
    pub map: MapConfig,
    pub staging: StagingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub folder: String,
}

#[derive(Clone, Deserialize)]
pub struct UplinkConfig {
    pub endpoint: String,
    pub imei: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Deserialize)]
pub struct MapConfig {
    pub api_key: String,
    pub open_viewer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StagingConfig {
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from an optional file, then `BALLOON_` environment
    /// variables (`BALLOON_UPLINK__PASSWORD` sets `uplink.password`).
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        Self::defaults()?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BALLOON")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("mail.host", "imap.gmail.com")?
            .set_default("mail.port", 993)?
            .set_default("mail.folder", "INBOX")?
            .set_default("uplink.endpoint", DEFAULT_ENDPOINT)?
            .set_default("map.open_viewer", true)?
            .set_default("staging.dir", ".")
    }
}

impl UplinkConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            imei: self.imei.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for UplinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UplinkConfig")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials())
            .finish()
    }
}

impl fmt::Debug for MapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapConfig")
            .field("api_key", &"<redacted>")
            .field("open_viewer", &self.open_viewer)
            .finish()
    }
}
