//! Playlist endpoints: create, inspect, and edit track lists.
//!
//! Mutating calls return the decoded JSON body as a [`Value`] because the
//! upstream API does not answer them with a uniform shape: creation returns
//! an object carrying the new playlist id, while track edits return a bare
//! boolean.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    client::DeezerClient,
    error::Result,
    request::Method,
    types::{Fetch, Playlist},
};

impl DeezerClient {
    /// Creates a playlist with the given title for the current user.
    pub async fn playlist_create(&self, title: &str) -> Result<Value> {
        let mut params = BTreeMap::new();
        params.insert("title".to_string(), title.to_string());

        self.mutate_json(Method::Post, "/user/me/playlists", params)
            .await
    }

    /// Fetches a playlist by its identifier.
    pub async fn playlist(&self, id: u64) -> Result<Fetch<Playlist>> {
        self.get_json(&format!("/playlist/{}", id), BTreeMap::new())
            .await
    }

    /// Adds tracks to a playlist.
    ///
    /// The identifiers are sent as a single comma-joined `songs` parameter,
    /// e.g. `[1, 2, 3]` encodes as `songs=1,2,3`.
    pub async fn playlist_add_tracks(&self, playlist_id: u64, track_ids: &[u64]) -> Result<Value> {
        let mut params = BTreeMap::new();
        params.insert("songs".to_string(), join_track_ids(track_ids));

        self.mutate_json(
            Method::Post,
            &format!("/playlist/{}/tracks", playlist_id),
            params,
        )
        .await
    }

    /// Removes tracks from a playlist. Same `songs` encoding as
    /// [`DeezerClient::playlist_add_tracks`].
    pub async fn playlist_remove_tracks(
        &self,
        playlist_id: u64,
        track_ids: &[u64],
    ) -> Result<Value> {
        let mut params = BTreeMap::new();
        params.insert("songs".to_string(), join_track_ids(track_ids));

        self.mutate_json(
            Method::Delete,
            &format!("/playlist/{}/tracks", playlist_id),
            params,
        )
        .await
    }
}

fn join_track_ids(track_ids: &[u64]) -> String {
    track_ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
