use reqwest::Url;

use crate::{error::GenreError, types::PlaylistId};

pub const SPOTIFY_PLAYLIST_HOST: &str = "open.spotify.com";
pub const PLAYLIST_PATH_PREFIX: &str = "/playlist/";

const SPOTIFY_URI_SCHEME: &str = "spotify";
const LOCALE_SEGMENT_PREFIX: &str = "/intl-";

/// Resolves a playlist link, a `spotify:playlist:` URI or a bare ID to the
/// playlist ID.
///
/// Links must point at [`SPOTIFY_PLAYLIST_HOST`]; the ID is the path segment
/// right after [`PLAYLIST_PATH_PREFIX`], so query strings such as `?si=...`
/// are dropped. Input that does not parse as an absolute URL, or parses without
/// a host, is taken verbatim.
///
/// # Errors
///
/// Returns [`GenreError::InvalidReference`] for empty input, links on any other
/// host and sharing links without a playlist ID.
///
/// # Example
///
/// ```
/// let id = resolve_playlist_id("https://open.spotify.com/playlist/ABC123?si=f00")?;
/// assert_eq!(id, "ABC123");
/// ```
pub fn resolve_playlist_id(reference: &str) -> Result<PlaylistId, GenreError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(GenreError::InvalidReference(reference.to_string()));
    }

    let url = match Url::parse(reference) {
        Ok(url) => url,
        // a bare id is a relative path without a base
        Err(_) => return Ok(reference.to_string()),
    };

    let id = match url.host_str() {
        Some(host) if host == SPOTIFY_PLAYLIST_HOST => playlist_id_from_path(url.path()),
        Some(_) => None,
        None if url.scheme() == SPOTIFY_URI_SCHEME => playlist_id_from_uri(url.path()),
        None => Some(reference.to_string()),
    };

    id.ok_or_else(|| GenreError::InvalidReference(reference.to_string()))
}

fn playlist_id_from_path(path: &str) -> Option<PlaylistId> {
    let path = strip_locale_segment(path);
    if !path.starts_with(PLAYLIST_PATH_PREFIX) {
        return None;
    }

    let id = path[PLAYLIST_PATH_PREFIX.len()..]
        .split('/')
        .next()
        .unwrap_or_default();

    non_empty(id)
}

// spotify:playlist:<id> and the legacy spotify:user:<user>:playlist:<id>
fn playlist_id_from_uri(path: &str) -> Option<PlaylistId> {
    let segments: Vec<&str> = path.split(':').collect();
    match segments.as_slice() {
        [.., "playlist", id] => non_empty(id),
        _ => None,
    }
}

fn strip_locale_segment(path: &str) -> &str {
    match path.strip_prefix(LOCALE_SEGMENT_PREFIX) {
        Some(rest) => rest.find('/').map(|idx| &rest[idx..]).unwrap_or(path),
        None => path,
    }
}

fn non_empty(id: &str) -> Option<PlaylistId> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
