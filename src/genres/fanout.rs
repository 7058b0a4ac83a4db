use std::collections::HashMap;

use futures::{StreamExt, stream};

use crate::{
    config,
    error::GenreError,
    genres::tally::{AggregationResult, GenreTally, SkippedLookup},
    spotify::Catalog,
    types::Track,
};

/// How artist occurrences are turned into catalog lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// One lookup per occurrence.
    #[default]
    PerOccurrence,
    /// One lookup per distinct artist, counted once per occurrence.
    Memoized,
}

/// What happens when an artist lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort on the first failure and return it.
    #[default]
    FailFast,
    /// Record the failure and keep counting. Credential rejections still abort.
    SkipFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Upper bound on concurrent artist lookups; values below 1 act as 1.
    pub max_in_flight: usize,
    pub lookup: LookupMode,
    pub on_failure: FailurePolicy,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        AggregateOptions {
            max_in_flight: config::DEFAULT_MAX_IN_FLIGHT,
            lookup: LookupMode::default(),
            on_failure: FailurePolicy::default(),
        }
    }
}

/// Flattens tracks into artist occurrences, in playlist order.
///
/// A track with two credited artists yields two entries, and an artist
/// credited on two tracks appears twice.
pub fn artist_occurrences(tracks: &[Track]) -> Vec<&str> {
    tracks
        .iter()
        .flat_map(|track| track.artist_ids.iter().map(String::as_str))
        .collect()
}

// (artist id, occurrences the lookup counts for), in first-seen order
fn lookup_plan<'a>(occurrences: &[&'a str], mode: LookupMode) -> Vec<(&'a str, u64)> {
    match mode {
        LookupMode::PerOccurrence => occurrences.iter().map(|id| (*id, 1)).collect(),
        LookupMode::Memoized => {
            let mut index: HashMap<&str, usize> = HashMap::new();
            let mut plan: Vec<(&str, u64)> = Vec::new();
            for &id in occurrences {
                match index.get(id) {
                    Some(&slot) => plan[slot].1 += 1,
                    None => {
                        index.insert(id, plan.len());
                        plan.push((id, 1));
                    }
                }
            }
            plan
        }
    }
}

/// Looks up every artist occurrence of `tracks` and tallies their genres.
///
/// Lookups run concurrently, at most `options.max_in_flight` at a time, and are
/// folded into the tally by this task as they settle. The function returns
/// only once every lookup has settled, so the tally is the same whatever order
/// the catalog answers in.
///
/// # Errors
///
/// Under [`FailurePolicy::FailFast`] the first failed lookup is returned and the
/// lookups still in flight are dropped. Under [`FailurePolicy::SkipFailed`]
/// only [`GenreError::Auth`] aborts.
pub async fn aggregate_tracks<C: Catalog>(
    catalog: &C,
    tracks: &[Track],
    options: &AggregateOptions,
) -> Result<AggregationResult, GenreError> {
    let occurrences = artist_occurrences(tracks);
    let plan = lookup_plan(&occurrences, options.lookup);
    let max_in_flight = options.max_in_flight.max(1);

    tracing::info!(
        tracks = tracks.len(),
        occurrences = occurrences.len(),
        lookups = plan.len(),
        max_in_flight,
        "dispatching artist lookups"
    );

    let mut lookups = stream::iter(plan)
        .map(move |(artist_id, weight)| async move {
            let outcome = catalog.fetch_artist(artist_id).await;
            (artist_id, weight, outcome)
        })
        .buffer_unordered(max_in_flight);

    let mut tally = GenreTally::new();
    let mut skipped = Vec::new();

    while let Some((artist_id, weight, outcome)) = lookups.next().await {
        match outcome {
            Ok(artist) => {
                tracing::debug!(
                    artist_id,
                    genres = artist.genres.len(),
                    weight,
                    "artist lookup settled"
                );
                tally.record(artist.genres.as_slice(), weight);
            }
            Err(err) if options.on_failure == FailurePolicy::SkipFailed && !err.is_auth() => {
                tracing::warn!(artist_id, error = %err, "skipping failed artist lookup");
                skipped.push(SkippedLookup {
                    artist_id: artist_id.to_string(),
                    occurrences: weight,
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                tracing::debug!(artist_id, error = %err, "aborting aggregation");
                return Err(err);
            }
        }
    }

    Ok(AggregationResult::new(tally, occurrences.len(), skipped))
}
