use crate::{AccessToken, OAuthTokens};

/// Authenticated read against the provider's resource API.
#[async_trait::async_trait]
pub trait ProtectedResource: Send + Sync + 'static {
    /// Performs a GET against `url` authorized with `token`, returning the
    /// response body.
    async fn get_protected_resource(&self, url: &str, token: &AccessToken)
    -> anyhow::Result<String>;
}

/// Exchange of an authorization code for tokens at the provider's token
/// endpoint.
#[async_trait::async_trait]
pub trait TokenExchange: Send + Sync + 'static {
    async fn exchange_code(&self, code: &str) -> anyhow::Result<OAuthTokens>;
}
