use strum_macros::{Display, EnumString};

/// Stage of the profile cascade an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Identity,
    Collection,
    Items,
}

impl Stage {
    /// Message reported when the upstream read for this stage fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Stage::Identity => "failed to fetch user profile",
            Stage::Collection => "failed to fetch user playlists",
            Stage::Items => "failed to fetch playlistItems",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{message} ({stage}): {source}")]
    Upstream {
        stage: Stage,
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Malformed {stage} response: {source}")]
    MalformedResponse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    #[error("{stage} stage finished with {completed} of {expected} entries completed")]
    Incomplete {
        stage: Stage,
        expected: usize,
        completed: usize,
    },

    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(#[source] anyhow::Error),

    #[error("Token exchange is not configured for this strategy")]
    TokenExchangeUnavailable,

    #[error("Invalid {name} URL '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    pub fn upstream(stage: Stage, source: anyhow::Error) -> Self {
        Self::Upstream { stage, message: stage.failure_message(), source }
    }

    pub fn malformed(stage: Stage, source: serde_json::Error) -> Self {
        Self::MalformedResponse { stage, source }
    }

    /// Stage that produced this error, if it came from the cascade.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Upstream { stage, .. }
            | Error::MalformedResponse { stage, .. }
            | Error::Incomplete { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
