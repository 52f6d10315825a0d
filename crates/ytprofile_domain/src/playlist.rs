use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result, Stage};

/// A playlist owned by the identity, together with its items once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    /// Provider supplied fields (`kind`, `etag`, `snippet`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Playlist items payload; set once the item fetch for this entry succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl PlaylistRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: Map::new(), data: None }
    }

    pub fn is_complete(&self) -> bool {
        self.data.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct PlaylistList {
    #[serde(default)]
    items: Vec<PlaylistRef>,
}

/// Parses a playlist listing body, preserving provider order. Entries start
/// without `data`, whatever the listing carries under that key.
pub fn parse_playlists(body: &str) -> Result<Vec<PlaylistRef>> {
    let listing: PlaylistList =
        serde_json::from_str(body).map_err(|e| Error::malformed(Stage::Collection, e))?;
    Ok(listing
        .items
        .into_iter()
        .map(|playlist| PlaylistRef { data: None, ..playlist })
        .collect())
}

/// Parses a playlist items body into the payload attached to its playlist.
pub fn parse_playlist_items(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::malformed(Stage::Items, e))
}
