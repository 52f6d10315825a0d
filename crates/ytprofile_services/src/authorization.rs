use std::collections::BTreeMap;

use url::Url;
use ytprofile_domain::{Error, Result, StrategyConfig};

/// Parameters merged into the authorization redirect when neither the call
/// nor the strategy configuration supplies any.
pub fn default_authorization_params() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("access_type".to_string(), "offline".to_string()),
        ("approval_prompt".to_string(), "force".to_string()),
    ])
}

/// Resolves authorization parameters: per-call override, then the configured
/// default, then the library default.
pub fn resolve_authorization_params(
    config: &StrategyConfig,
    overrides: Option<&BTreeMap<String, String>>,
) -> BTreeMap<String, String> {
    overrides
        .or(config.authorization_params.as_ref())
        .cloned()
        .unwrap_or_else(default_authorization_params)
}

/// Builds the URL the user is redirected to in order to grant access.
pub fn build_authorization_url(
    config: &StrategyConfig,
    state: Option<&str>,
    overrides: Option<&BTreeMap<String, String>>,
) -> Result<Url> {
    let mut url = Url::parse(&config.authorization_url).map_err(|source| Error::InvalidUrl {
        name: "authorization",
        value: config.authorization_url.clone(),
        source,
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("response_type", "code");
        if let Some(client_id) = &config.client_id {
            query.append_pair("client_id", client_id);
        }
        if let Some(callback_url) = &config.callback_url {
            query.append_pair("redirect_uri", callback_url);
        }
        if !config.scopes.is_empty() {
            query.append_pair("scope", &config.scopes.join(" "));
        }
        if let Some(state) = state {
            query.append_pair("state", state);
        }
        for (key, value) in resolve_authorization_params(config, overrides) {
            query.append_pair(&key, &value);
        }
    }

    Ok(url)
}
