use reqwest::Client;
use tracing::debug;
use ytprofile_domain::{OAuthTokens, StrategyConfig, TokenExchange};

/// Authorization code exchange against the provider's token endpoint.
pub struct ReqwestTokenExchange {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: Option<String>,
}

impl ReqwestTokenExchange {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: None,
        }
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Creates the exchange from the strategy configuration. Fails when the
    /// client credentials are not configured.
    pub fn from_config(client: Client, config: &StrategyConfig) -> anyhow::Result<Self> {
        let client_id = config
            .client_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("client_id not configured"))?;
        let client_secret = config
            .client_secret
            .clone()
            .ok_or_else(|| anyhow::anyhow!("client_secret not configured"))?;

        let exchange = Self::new(client, config.token_url.clone(), client_id, client_secret);
        Ok(match &config.callback_url {
            Some(callback_url) => exchange.redirect_uri(callback_url.clone()),
            None => exchange,
        })
    }
}

#[async_trait::async_trait]
impl TokenExchange for ReqwestTokenExchange {
    async fn exchange_code(&self, code: &str) -> anyhow::Result<OAuthTokens> {
        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        if let Some(redirect_uri) = &self.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        debug!(token_url = %self.token_url, "Exchanging authorization code");
        let response = self.client.post(&self.token_url).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Token exchange failed ({}): {}", status, body);
        }

        let tokens: OAuthTokens = response.json().await?;
        Ok(tokens)
    }
}
