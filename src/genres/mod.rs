//! # Genre Pipeline
//!
//! Turns a playlist reference into a ranked genre breakdown:
//!
//! ```text
//! reference ─► resolve_playlist_id ─► Catalog::fetch_tracks
//!                                          │
//!                    ┌─────────────────────┘
//!                    ▼
//!            aggregate_tracks (fan-out, one lookup per artist occurrence)
//!                    │
//!                    ▼
//!            report::build ─► GenreReport
//! ```
//!
//! Every appearance of an artist on a track counts as one occurrence, and each
//! occurrence adds one hit to each of the artist's genres. The percentage of a
//! genre is its share of all hits, not of tracks or artists.

mod fanout;
pub mod report;
mod tally;

pub use fanout::{AggregateOptions, FailurePolicy, LookupMode, aggregate_tracks, artist_occurrences};
pub use tally::{AggregationResult, GenreTally, SkippedLookup};

use crate::{
    config,
    error::GenreError,
    spotify::{Catalog, SpotifyClient},
    types::GenreReport,
    utils,
};

/// Builds the genre report of a playlist using the Spotify Web API.
///
/// Uses the configured API URL, request timeout and concurrency cap.
///
/// # Example
///
/// ```
/// let report = aggregate("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M", &token).await?;
/// for genre in report.genres {
///     println!("{}: {:.2}%", genre.genre, genre.percentage);
/// }
/// ```
pub async fn aggregate(reference: &str, credential: &str) -> Result<GenreReport, GenreError> {
    let client = SpotifyClient::from_env(credential)?;
    let options = config::aggregate_options()?;
    aggregate_with(&client, reference, &options).await
}

/// Builds the genre report of a playlist from any [`Catalog`].
pub async fn aggregate_with<C: Catalog>(
    catalog: &C,
    reference: &str,
    options: &AggregateOptions,
) -> Result<GenreReport, GenreError> {
    let playlist_id = utils::resolve_playlist_id(reference)?;
    let tracks = catalog.fetch_tracks(&playlist_id).await?;
    let result = aggregate_tracks(catalog, &tracks, options).await?;
    let genres = report::build(&result);

    tracing::info!(
        playlist_id = %playlist_id,
        total = result.total(),
        genres = genres.len(),
        "aggregation complete"
    );

    Ok(GenreReport {
        playlist_id,
        total: result.total(),
        occurrences: result.occurrences(),
        skipped: result.skipped_occurrences(),
        genres,
    })
}
