use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ytprofile")]
#[command(about = "Authenticate with YouTube and assemble a profile with playlists and their items")]
pub struct Cli {
    /// TOML file overriding the built-in endpoints and client settings
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the URL the user should visit to grant access
    AuthorizeUrl {
        /// Opaque value echoed back on the callback
        #[arg(long)]
        state: Option<String>,
    },
    /// Fetch the profile for an existing access token
    Profile {
        #[arg(long, env = "YTPROFILE_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Exchange an authorization code for a token and fetch the profile
    Exchange {
        #[arg(long)]
        code: String,
    },
    /// Translate profile field names to provider field names
    Fields {
        #[arg(required = true)]
        names: Vec<String>,
    },
}
