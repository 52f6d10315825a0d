use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use ytprofile_domain::{AccessToken, ProtectedResource};

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Failure(String),
    Panic,
}

#[derive(Debug, Clone)]
struct Route {
    reply: Reply,
    delay: Duration,
}

/// In-memory resource API answering by exact URL, with optional per-route
/// latency to control completion order.
#[derive(Debug, Default)]
pub struct MockResource {
    routes: HashMap<String, Route>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.route(url, Reply::Body(body.into()), 0)
    }

    pub fn ok_after(self, url: impl Into<String>, body: impl Into<String>, delay_ms: u64) -> Self {
        self.route(url, Reply::Body(body.into()), delay_ms)
    }

    pub fn fail(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.route(url, Reply::Failure(message.into()), 0)
    }

    pub fn fail_after(
        self,
        url: impl Into<String>,
        message: impl Into<String>,
        delay_ms: u64,
    ) -> Self {
        self.route(url, Reply::Failure(message.into()), delay_ms)
    }

    pub fn panic_on(self, url: impl Into<String>) -> Self {
        self.route(url, Reply::Panic, 0)
    }

    fn route(mut self, url: impl Into<String>, reply: Reply, delay_ms: u64) -> Self {
        self.routes
            .insert(url.into(), Route { reply, delay: Duration::from_millis(delay_ms) });
        self
    }

    /// URLs requested so far, in dispatch order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, token)| token.clone()).collect()
    }
}

#[async_trait::async_trait]
impl ProtectedResource for MockResource {
    async fn get_protected_resource(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), token.as_str().to_string()));

        let route = self
            .routes
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: {url}"))?;

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        match route.reply {
            Reply::Body(body) => Ok(body),
            Reply::Failure(message) => Err(anyhow::anyhow!(message)),
            Reply::Panic => panic!("connection handler crashed for {url}"),
        }
    }
}

pub mod fixtures {
    use serde_json::json;

    pub const IDENTITY_URL: &str = "http://api.test/channels?part=snippet&mine=true";
    pub const COLLECTION_URL: &str = "http://api.test/playlists?part=snippet&channelId=";
    pub const ITEM_URL: &str = "http://api.test/playlistItems?part=snippet&playlistId=";

    pub fn identity_body() -> String {
        json!({
            "items": [{
                "id": "C1",
                "snippet": {"title": "Alice", "thumbnails": {"default": {"url": "http://img/a.png"}}}
            }]
        })
        .to_string()
    }

    pub fn playlists_body(ids: &[&str]) -> String {
        let items: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "snippet": {"title": format!("Playlist {id}")}}))
            .collect();
        json!({ "items": items }).to_string()
    }

    pub fn items_body(playlist_id: &str) -> String {
        json!({"videos": [{"playlistId": playlist_id, "title": format!("Video of {playlist_id}")}]})
            .to_string()
    }

    pub fn collection_url(channel_id: &str) -> String {
        format!("{COLLECTION_URL}{channel_id}")
    }

    pub fn item_url(playlist_id: &str) -> String {
        format!("{ITEM_URL}{playlist_id}")
    }
}
