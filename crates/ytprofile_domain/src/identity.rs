use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, Stage};

/// Base identity record of the authenticated user (a YouTube channel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    /// Unmodified response body.
    pub raw: String,
    /// Parsed response body.
    pub raw_parsed: Value,
}

#[derive(Debug, Deserialize)]
struct ChannelList {
    #[serde(default)]
    items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    id: Option<String>,
    #[serde(default)]
    snippet: Option<ChannelSnippet>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: Option<String>,
    #[serde(default)]
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

impl Identity {
    /// Builds an identity from the channel listing body.
    ///
    /// A listing without channels is not an error: the identity then only
    /// carries the raw payload.
    pub fn from_body(body: impl Into<String>) -> Result<Self> {
        let raw = body.into();
        let raw_parsed: Value =
            serde_json::from_str(&raw).map_err(|e| Error::malformed(Stage::Identity, e))?;
        let listing: ChannelList = serde_json::from_value(raw_parsed.clone())
            .map_err(|e| Error::malformed(Stage::Identity, e))?;

        let channel = listing.items.into_iter().next();
        let (id, display_name, picture_url) = match channel {
            Some(channel) => {
                let snippet = channel.snippet;
                let picture_url = snippet
                    .as_ref()
                    .and_then(|s| s.thumbnails.as_ref())
                    .and_then(|t| t.default.as_ref())
                    .and_then(|t| t.url.clone());
                let display_name = snippet.and_then(|s| s.title);
                (channel.id, display_name, picture_url)
            }
            None => (None, None, None),
        };

        Ok(Self { id, display_name, picture_url, raw, raw_parsed })
    }

    /// Id used to scope the playlist query; empty when no channel was found.
    pub fn collection_key(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}
