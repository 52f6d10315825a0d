use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;
use ytprofile_domain::{
    AccessToken, Error, OAuthTokens, Profile, ProtectedResource, Result, StrategyConfig,
    TokenExchange,
};

use crate::{
    CollectionFetcher, IdentityFetcher, ItemAggregator, build_authorization_url,
    resolve_authorization_params,
};

/// Progress of a single profile cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Identity,
    Collection,
    Aggregating(usize),
    Completed,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Completed | PipelineState::Failed)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => f.write_str("idle"),
            PipelineState::Identity => f.write_str("identity"),
            PipelineState::Collection => f.write_str("collection"),
            PipelineState::Aggregating(outstanding) => write!(f, "aggregating({outstanding})"),
            PipelineState::Completed => f.write_str("completed"),
            PipelineState::Failed => f.write_str("failed"),
        }
    }
}

/// YouTube authentication strategy.
///
/// Composes the injected resource client with the three cascade stages. The
/// token exchange is optional; without it only [`YoutubeStrategy::user_profile`]
/// is usable.
pub struct YoutubeStrategy<R> {
    config: StrategyConfig,
    identity: IdentityFetcher<R>,
    collection: CollectionFetcher<R>,
    items: ItemAggregator<R>,
    exchange: Option<Arc<dyn TokenExchange>>,
}

impl<R: ProtectedResource> YoutubeStrategy<R> {
    pub fn new(config: StrategyConfig, client: Arc<R>) -> Self {
        Self {
            identity: IdentityFetcher::new(client.clone(), config.identity_url.clone()),
            collection: CollectionFetcher::new(client.clone(), config.collection_url.clone()),
            items: ItemAggregator::new(client, config.item_url.clone()),
            exchange: None,
            config,
        }
    }

    pub fn with_token_exchange(mut self, exchange: Arc<dyn TokenExchange>) -> Self {
        self.exchange = Some(exchange);
        self
    }

    pub fn name(&self) -> &'static str {
        ytprofile_domain::PROVIDER_NAME
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Runs the identity, playlist and playlist items cascade and assembles
    /// the profile. Either every playlist carries its items or an error is
    /// returned.
    pub async fn user_profile(&self, token: &AccessToken) -> Result<Profile> {
        let mut state = PipelineState::Idle;
        let result = self.run(token, &mut state).await;
        match &result {
            Ok(profile) => {
                transition(&mut state, PipelineState::Completed);
                info!(
                    channel_id = profile.id.as_deref().unwrap_or_default(),
                    playlists = profile.playlists.len(),
                    "Profile assembled"
                );
            }
            Err(error) => {
                let failed_in = state;
                transition(&mut state, PipelineState::Failed);
                warn!(state = %failed_in, error = %error, "Profile cascade failed");
            }
        }
        result
    }

    async fn run(&self, token: &AccessToken, state: &mut PipelineState) -> Result<Profile> {
        transition(state, PipelineState::Identity);
        let identity = self.identity.fetch(token).await?;

        transition(state, PipelineState::Collection);
        let playlists = self.collection.fetch(token, identity.collection_key()).await?;

        transition(state, PipelineState::Aggregating(playlists.len()));
        let playlists = self.items.aggregate(token, playlists).await?;

        Ok(Profile::new(identity, playlists))
    }

    /// Callback form of [`YoutubeStrategy::user_profile`]. `done` receives the
    /// single terminal result.
    pub async fn user_profile_with<F>(&self, token: &AccessToken, done: F)
    where
        F: FnOnce(Result<Profile>),
    {
        done(self.user_profile(token).await)
    }

    /// Exchanges an authorization code for tokens, then loads the profile.
    pub async fn authenticate(&self, code: &str) -> Result<(OAuthTokens, Profile)> {
        let exchange = self.exchange.as_ref().ok_or(Error::TokenExchangeUnavailable)?;
        let tokens = exchange.exchange_code(code).await.map_err(Error::TokenExchange)?;
        debug!(token_type = %tokens.token_type, "Authorization code exchanged");
        let profile = self.user_profile(&tokens.access_token).await?;
        Ok((tokens, profile))
    }

    pub fn authorization_params(
        &self,
        overrides: Option<&BTreeMap<String, String>>,
    ) -> BTreeMap<String, String> {
        resolve_authorization_params(&self.config, overrides)
    }

    pub fn authorization_url(
        &self,
        state: Option<&str>,
        overrides: Option<&BTreeMap<String, String>>,
    ) -> Result<Url> {
        build_authorization_url(&self.config, state, overrides)
    }
}

fn transition(state: &mut PipelineState, next: PipelineState) {
    debug!(from = %state, to = %next, "Profile cascade state");
    *state = next;
}
