use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome of a GET endpoint: either a decoded body or "successfully fetched
/// nothing" (the server answered with an empty or null body).
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Found(T),
    Empty,
}

impl<T> Fetch<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Fetch::Found(value) => Some(value),
            Fetch::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Fetch::Empty)
    }
}

/// Parsed token-exchange response.
///
/// The authorization API answers with an ampersand-delimited body
/// (`access_token=...&expires=...`), not JSON. All pairs are kept so callers
/// can inspect whatever the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    values: BTreeMap<String, String>,
}

impl AuthToken {
    /// Parses a `key=value&key=value` body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedAuthResponse`] for an empty body or any pair
    /// without an equals sign.
    pub fn parse(body: &str) -> Result<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(Error::MalformedAuthResponse {
                body: body.to_string(),
            });
        }

        let mut values = BTreeMap::new();
        for pair in trimmed.split('&') {
            let (key, value) = pair.split_once('=').ok_or_else(|| Error::MalformedAuthResponse {
                body: body.to_string(),
            })?;
            if key.is_empty() {
                return Err(Error::MalformedAuthResponse {
                    body: body.to_string(),
                });
            }
            values.insert(key.to_string(), value.to_string());
        }

        Ok(AuthToken { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.get("access_token")
    }

    pub fn expires(&self) -> Option<&str> {
        self.get("expires")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub artist: Option<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub data: Vec<Track>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistCreator {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub data: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub nb_tracks: Option<u64>,
    #[serde(default)]
    pub creator: Option<PlaylistCreator>,
    #[serde(default)]
    pub tracks: Option<PlaylistTracks>,
}
