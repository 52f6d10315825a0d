use std::sync::Arc;

use tracing::debug;
use ytprofile_domain::{AccessToken, Error, Identity, ProtectedResource, Result, Stage};

/// Resolves the authenticated user's channel.
pub struct IdentityFetcher<R> {
    client: Arc<R>,
    url: String,
}

impl<R: ProtectedResource> IdentityFetcher<R> {
    pub fn new(client: Arc<R>, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub async fn fetch(&self, token: &AccessToken) -> Result<Identity> {
        debug!(url = %self.url, "Fetching identity");
        let body = self
            .client
            .get_protected_resource(&self.url, token)
            .await
            .map_err(|e| Error::upstream(Stage::Identity, e))?;

        let identity = Identity::from_body(body)?;
        if identity.id.is_none() {
            debug!("Identity listing contained no channel");
        }
        Ok(identity)
    }
}
