use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use tracing::debug;
use ytprofile_domain::{AccessToken, HttpConfig, ProtectedResource};

const VERSION: &str = match option_env!("APP_VERSION") {
    None => env!("CARGO_PKG_VERSION"),
    Some(v) => v,
};

/// Builds the HTTP client shared by every provider call.
pub fn build_client(config: &HttpConfig) -> anyhow::Result<Client> {
    Ok(Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .read_timeout(Duration::from_secs(config.read_timeout))
        .build()?)
}

/// Performs bearer-authorized GETs against the YouTube Data API.
#[derive(Default, Clone)]
pub struct ReqwestResourceClient {
    client: Client,
}

impl ReqwestResourceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> anyhow::Result<Self> {
        Ok(Self::new(build_client(config)?))
    }

    fn headers(&self, token: &AccessToken) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("ytprofile/{VERSION}"))
                .unwrap_or(HeaderValue::from_static("ytprofile")),
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?);
        debug!(headers = ?sanitize_headers(&headers), "Request Headers");
        Ok(headers)
    }

    async fn get(&self, url: &str, token: &AccessToken) -> anyhow::Result<String> {
        let url = Url::parse(url)?;
        let response = self
            .client
            .get(url.clone())
            .headers(self.headers(token)?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            anyhow::bail!("GET request to {url} failed ({status}): {body}");
        }
        debug!(%url, %status, bytes = body.len(), "Protected resource fetched");
        Ok(body)
    }
}

fn sanitize_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                HeaderValue::from_static("[REDACTED]")
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}

#[async_trait::async_trait]
impl ProtectedResource for ReqwestResourceClient {
    async fn get_protected_resource(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> anyhow::Result<String> {
        self.get(url, token).await
    }
}
