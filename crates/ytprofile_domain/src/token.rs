use serde::{Deserialize, Serialize};

/// Bearer credential used to authorize every read against the resource API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From, derive_more::Deref)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_debug_does_not_leak_token() {
        let fixture = AccessToken::new("ya29.secret");
        let actual = format!("{fixture:?}");
        let expected = "AccessToken([REDACTED])";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_deref_exposes_raw_value() {
        let fixture = AccessToken::from("T1");
        assert_eq!(fixture.len(), 2);
        assert_eq!(fixture.as_str(), "T1");
    }
}
