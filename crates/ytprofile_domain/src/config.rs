use std::collections::BTreeMap;
use std::path::Path;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Timeouts applied to the HTTP client used for every provider call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[setters(into)]
pub struct HttpConfig {
    /// Connect timeout in seconds
    pub connect_timeout: u64,
    /// Read timeout in seconds
    pub read_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { connect_timeout: 30, read_timeout: 60 }
    }
}

/// Endpoints, scopes and client settings of the YouTube strategy.
///
/// Every field can be overridden; defaults point at Google's documented
/// OAuth2 and YouTube Data API v3 endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(into)]
pub struct StrategyConfig {
    pub authorization_url: String,
    pub token_url: String,
    /// Channel listing of the authenticated user.
    pub identity_url: String,
    /// Playlist listing; the channel id is appended.
    pub collection_url: String,
    /// Playlist items listing; the playlist id is appended.
    pub item_url: String,
    pub scopes: Vec<String>,
    /// Strategy level authorization parameters, used when a call supplies
    /// none.
    #[setters(strip_option)]
    pub authorization_params: Option<BTreeMap<String, String>>,
    #[setters(strip_option)]
    pub client_id: Option<String>,
    #[setters(strip_option)]
    pub client_secret: Option<String>,
    #[setters(strip_option)]
    pub callback_url: Option<String>,
    pub http: HttpConfig,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            authorization_url: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_url: "https://accounts.google.com/o/oauth2/token".to_string(),
            identity_url: "https://www.googleapis.com/youtube/v3/channels?part=snippet&mine=true"
                .to_string(),
            collection_url:
                "https://www.googleapis.com/youtube/v3/playlists?part=snippet&maxResults=50&channelId="
                    .to_string(),
            item_url:
                "https://www.googleapis.com/youtube/v3/playlistItems?part=snippet&maxResults=50&playlistId="
                    .to_string(),
            scopes: vec!["https://www.googleapis.com/auth/youtube".to_string()],
            authorization_params: None,
            client_id: None,
            client_secret: None,
            callback_url: None,
            http: HttpConfig::default(),
        }
    }
}

impl StrategyConfig {
    /// Loads the configuration with the config crate.
    ///
    /// Sources in order of precedence (lowest first):
    /// 1. Built-in defaults
    /// 2. The optional TOML `file`
    /// 3. Environment variables prefixed with `YTPROFILE_`, using `__` for
    ///    nested keys (`YTPROFILE_HTTP__READ_TIMEOUT`) and `,` between scopes
    pub fn from_env(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(file) = file {
            builder = builder.add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("YTPROFILE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scopes")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        tracing::debug!(
            identity_url = %config.identity_url,
            collection_url = %config.collection_url,
            item_url = %config.item_url,
            "Loaded strategy configuration"
        );
        Ok(config)
    }
}
