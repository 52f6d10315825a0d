use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use ytprofile_domain::{
    AccessToken, Error, PlaylistRef, ProtectedResource, Result, Stage, parse_playlist_items,
};

use crate::CompletionTracker;

/// Fetches the items of every playlist concurrently and attaches each
/// payload to the playlist it was requested for.
pub struct ItemAggregator<R> {
    client: Arc<R>,
    url: String,
}

impl<R: ProtectedResource> ItemAggregator<R> {
    /// `url` is completed by appending the playlist id.
    pub fn new(client: Arc<R>, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// Dispatches one request per playlist, in collection order, and waits
    /// until every playlist has its `data` set.
    ///
    /// The first failure is returned as soon as it arrives. Requests still in
    /// flight run to completion but their results are dropped.
    pub async fn aggregate(
        &self,
        token: &AccessToken,
        mut playlists: Vec<PlaylistRef>,
    ) -> Result<Vec<PlaylistRef>> {
        if playlists.is_empty() {
            return Ok(playlists);
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, Result<Value>)>();
        for (index, playlist) in playlists.iter().enumerate() {
            let client = self.client.clone();
            let token = token.clone();
            let tx = tx.clone();
            let url = format!("{}{}", self.url, playlist.id);
            debug!(playlist_id = %playlist.id, "Dispatching playlist items request");

            tokio::spawn(async move {
                let result = match client.get_protected_resource(&url, &token).await {
                    Ok(body) => parse_playlist_items(&body),
                    Err(e) => Err(Error::upstream(Stage::Items, e)),
                };
                // Fails once the aggregation has already settled.
                let _ = tx.send((index, result));
            });
        }
        drop(tx);

        let mut tracker = CompletionTracker::new(playlists.len());
        while let Some((index, result)) = rx.recv().await {
            match result {
                Ok(data) => {
                    if !tracker.complete(index) {
                        continue;
                    }
                    playlists[index].data = Some(data);
                    debug!(
                        playlist_id = %playlists[index].id,
                        completed = tracker.completed(),
                        total = tracker.len(),
                        "Playlist items attached"
                    );
                    if tracker.is_done() {
                        return Ok(playlists);
                    }
                }
                Err(error) => {
                    warn!(
                        playlist_id = %playlists[index].id,
                        error = %error,
                        "Playlist items request failed"
                    );
                    return Err(error);
                }
            }
        }

        // Every sender is gone without reporting: a request task panicked.
        Err(Error::Incomplete {
            stage: Stage::Items,
            expected: tracker.len(),
            completed: tracker.completed(),
        })
    }
}
