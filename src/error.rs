//! Error taxonomy for the genre pipeline.
//!
//! Every failure that can surface from resolving a playlist reference, talking
//! to the Spotify Web API or reading configuration is expressed as a
//! [`GenreError`]. Catalog errors always name the [`Resource`] they concern so
//! the shell can tell a missing playlist apart from a missing artist.

use std::fmt;

use thiserror::Error;

/// The catalog resource a request was made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Playlist(String),
    Artist(String),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Playlist(id) => write!(f, "playlist `{}`", id),
            Resource::Artist(id) => write!(f, "artist `{}`", id),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenreError {
    /// The input was neither a playlist URL on the sharing host nor a bare ID.
    #[error("invalid playlist reference `{0}`")]
    InvalidReference(String),

    /// The bearer credential was rejected (HTTP 401).
    #[error("credential rejected while fetching {resource}")]
    Auth { resource: Resource },

    /// The resource does not exist or is not accessible with the credential.
    #[error("{resource} not found or not accessible")]
    NotFound { resource: Resource },

    /// Network failure, rate limiting or a server-side error.
    #[error("transient failure while fetching {resource}: {reason}")]
    Transient { resource: Resource, reason: String },

    /// The response body did not match the expected schema.
    #[error("malformed response for {resource}: {source}")]
    MalformedResponse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// A paging link pointed away from the API origin the client talks to.
    #[error("paging link `{url}` for {resource} leaves the API origin")]
    ForeignLink { resource: Resource, url: String },

    /// A status code outside the classified ranges.
    #[error("unexpected status {status} while fetching {resource}")]
    UnexpectedStatus { resource: Resource, status: u16 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl GenreError {
    pub fn transient(resource: Resource, reason: impl Into<String>) -> Self {
        GenreError::Transient {
            resource,
            reason: reason.into(),
        }
    }

    /// The resource a catalog error concerns, if any.
    pub fn resource(&self) -> Option<&Resource> {
        match self {
            GenreError::Auth { resource }
            | GenreError::NotFound { resource }
            | GenreError::Transient { resource, .. }
            | GenreError::MalformedResponse { resource, .. }
            | GenreError::ForeignLink { resource, .. }
            | GenreError::UnexpectedStatus { resource, .. } => Some(resource),
            GenreError::InvalidReference(_) | GenreError::Config(_) => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, GenreError::Auth { .. })
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, GenreError::Transient { .. })
    }
}
