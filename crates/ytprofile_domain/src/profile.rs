use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Identity, PlaylistRef};

/// Provider tag carried by every profile.
pub const PROVIDER_NAME: &str = "youtube";

/// Normalized user profile assembled by the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub raw: String,
    pub json: Value,
    pub playlists: Vec<PlaylistRef>,
}

impl Profile {
    pub fn new(identity: Identity, playlists: Vec<PlaylistRef>) -> Self {
        Self {
            provider: PROVIDER_NAME.to_string(),
            id: identity.id,
            display_name: identity.display_name,
            picture: identity.picture_url,
            raw: identity.raw,
            json: identity.raw_parsed,
            playlists,
        }
    }

    /// Whether every playlist carries its items payload.
    pub fn is_complete(&self) -> bool {
        self.playlists.iter().all(PlaylistRef::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_profile_serializes_in_camel_case() {
        let identity = Identity::from_body(
            json!({"items": [{"id": "C1", "snippet": {"title": "Alice"}}]}).to_string(),
        )
        .unwrap();
        let mut playlist = PlaylistRef::new("P1");
        playlist.data = Some(json!({"videos": []}));

        let fixture = Profile::new(identity, vec![playlist]);
        let actual = serde_json::to_value(&fixture).unwrap();

        assert_eq!(actual["provider"], json!("youtube"));
        assert_eq!(actual["displayName"], json!("Alice"));
        assert_eq!(actual["playlists"], json!([{"id": "P1", "data": {"videos": []}}]));
        assert_eq!(actual.get("picture"), None);
        assert!(fixture.is_complete());
    }

    #[test]
    fn test_profile_without_channel_only_has_provider_metadata() {
        let identity = Identity::from_body(r#"{"items":[]}"#).unwrap();

        let fixture = Profile::new(identity, vec![]);

        assert_eq!(fixture.provider, PROVIDER_NAME);
        assert_eq!(fixture.id, None);
        assert_eq!(fixture.display_name, None);
        assert_eq!(fixture.raw, r#"{"items":[]}"#);
        assert!(fixture.is_complete());
    }

    #[test]
    fn test_incomplete_when_a_playlist_lacks_data() {
        let identity = Identity::from_body(r#"{"items":[]}"#).unwrap();
        let fixture = Profile::new(identity, vec![PlaylistRef::new("P1")]);
        assert!(!fixture.is_complete());
    }
}
