mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ytprofile_domain::{AccessToken, StrategyConfig, convert_profile_fields};
use ytprofile_infra::{ReqwestResourceClient, ReqwestTokenExchange, build_client};
use ytprofile_services::YoutubeStrategy;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the profile JSON, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytprofile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = StrategyConfig::from_env(cli.config.as_deref())
        .context("Failed to load ytprofile configuration")?;

    let http = build_client(&config.http)?;
    let client = Arc::new(ReqwestResourceClient::new(http.clone()));
    let mut strategy = YoutubeStrategy::new(config.clone(), client);

    match cli.command {
        Command::AuthorizeUrl { state } => {
            let url = strategy.authorization_url(state.as_deref(), None)?;
            println!("{url}");
        }
        Command::Profile { token } => {
            let profile = strategy.user_profile(&AccessToken::new(token)).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Exchange { code } => {
            let exchange = ReqwestTokenExchange::from_config(http, &config)?;
            strategy = strategy.with_token_exchange(Arc::new(exchange));
            let (tokens, profile) = strategy.authenticate(&code).await?;
            tracing::info!(expires_in = ?tokens.expires_in, "Access token issued");
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Fields { names } => {
            println!("{}", convert_profile_fields(&names));
        }
    }

    Ok(())
}
