//! # Spotify Integration Module
//!
//! This module provides the catalog side of the genre pipeline: a typed, read-only
//! accessor over the two Spotify Web API resources the pipeline needs. It handles
//! bearer authentication, HTTP status classification and the deserialization of
//! responses into explicit DTOs.
//!
//! ## Architecture
//!
//! ```text
//! Genre Pipeline (fan-out aggregator)
//!          ↓
//! Catalog trait
//!     └── SpotifyClient
//!         ├── Playlist Operations (track listing, paging)
//!         └── Artist Operations (metadata, genre tags)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! The aggregator only depends on [`Catalog`], so it can be driven by any
//! source of playlist and artist data, including in-memory fakes in tests.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}` - Playlist object with its first page of items
//! - `GET /playlists/{id}/tracks?offset=..` - Further pages, followed via `next`
//! - `GET /artists/{id}` - Artist metadata including the genre list
//!
//! ## Error Handling
//!
//! Responses are classified into [`GenreError`] kinds:
//! - **401** - [`GenreError::Auth`]
//! - **400, 403, 404** - [`GenreError::NotFound`]
//! - **429, 5xx, network failures** - [`GenreError::Transient`]
//! - **Schema mismatches** - [`GenreError::MalformedResponse`]
//! - **Anything else** - [`GenreError::UnexpectedStatus`]
//!
//! No retries happen at this layer; errors surface to the caller as-is.

use std::{future::Future, time::Duration};

use reqwest::{Client, Response, StatusCode, Url, header::RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::{GenreError, Resource},
    types::{Artist, Track},
};

pub mod artists;
pub mod playlist;

/// Read access to the playlist and artist catalog.
pub trait Catalog {
    /// Returns every track of a playlist, in playlist order.
    fn fetch_tracks(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, GenreError>> + Send;

    /// Returns the metadata of one artist, including its genre tags.
    fn fetch_artist(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<Artist, GenreError>> + Send;
}

/// [`Catalog`] backed by the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Creates a client for the given API base URL and bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`GenreError::Config`] if the HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenreError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(SpotifyClient {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Creates a client for the configured API URL and request timeout.
    pub fn from_env(token: impl Into<String>) -> Result<Self, GenreError> {
        Self::new(config::spotify_apiurl(), token, config::request_timeout()?)
    }

    /// Builds `{api_url}/{segments..}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, GenreError> {
        let invalid = || GenreError::Config(format!("invalid API URL `{}`", self.api_url));

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Performs an authenticated GET and decodes the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &Resource,
    ) -> Result<T, GenreError> {
        tracing::trace!(%url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| GenreError::transient(resource.clone(), e.to_string()))?;

        let response = classify(response, resource)?;
        let body = response
            .bytes()
            .await
            .map_err(|e| GenreError::transient(resource.clone(), e.to_string()))?;

        serde_json::from_slice(&body).map_err(|source| GenreError::MalformedResponse {
            resource: resource.clone(),
            source,
        })
    }
}

impl Catalog for SpotifyClient {
    fn fetch_tracks(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, GenreError>> + Send {
        playlist::get_playlist_tracks(self, playlist_id)
    }

    fn fetch_artist(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<Artist, GenreError>> + Send {
        artists::get_artist(self, artist_id)
    }
}

fn classify(response: Response, resource: &Resource) -> Result<Response, GenreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let resource = resource.clone();
    let err = match status {
        StatusCode::UNAUTHORIZED => GenreError::Auth { resource },
        StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            GenreError::NotFound { resource }
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let reason = match retry_after(&response) {
                Some(secs) => format!("rate limited, retry after {} seconds", secs),
                None => "rate limited".to_string(),
            };
            GenreError::Transient { resource, reason }
        }
        s if s.is_server_error() => GenreError::Transient {
            resource,
            reason: format!("server responded with {}", s),
        },
        s => GenreError::UnexpectedStatus {
            resource,
            status: s.as_u16(),
        },
    };

    Err(err)
}

fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
