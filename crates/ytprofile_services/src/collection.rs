use std::sync::Arc;

use tracing::debug;
use ytprofile_domain::{
    AccessToken, Error, PlaylistRef, ProtectedResource, Result, Stage, parse_playlists,
};

/// Resolves the playlists owned by a channel.
pub struct CollectionFetcher<R> {
    client: Arc<R>,
    url: String,
}

impl<R: ProtectedResource> CollectionFetcher<R> {
    /// `url` is completed by appending the channel id.
    pub fn new(client: Arc<R>, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub async fn fetch(&self, token: &AccessToken, channel_id: &str) -> Result<Vec<PlaylistRef>> {
        let url = format!("{}{}", self.url, channel_id);
        debug!(url = %url, "Fetching playlists");
        let body = self
            .client
            .get_protected_resource(&url, token)
            .await
            .map_err(|e| Error::upstream(Stage::Collection, e))?;

        let playlists = parse_playlists(&body)?;
        debug!(count = playlists.len(), "Fetched playlists");
        Ok(playlists)
    }
}
