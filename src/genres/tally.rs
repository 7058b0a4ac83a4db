use std::collections::BTreeMap;

use crate::types::ArtistId;

/// Occurrence counts per genre, with the running sum of all counts.
///
/// Genres are kept in a `BTreeMap`, so iteration is ordered by genre name no
/// matter in which order lookups settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTally {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl GenreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` hits to every genre in `genres` and to the total.
    pub fn record<S: AsRef<str>>(&mut self, genres: &[S], weight: u64) {
        for genre in genres {
            let genre = genre.as_ref();
            match self.counts.get_mut(genre) {
                Some(count) => *count += weight,
                None => {
                    self.counts.insert(genre.to_string(), weight);
                }
            }
            self.total += weight;
        }
    }

    pub fn get(&self, genre: &str) -> u64 {
        self.counts.get(genre).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
    }
}

/// An artist lookup that failed and was left out of the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLookup {
    pub artist_id: ArtistId,
    /// Artist occurrences the failed lookup stood for.
    pub occurrences: u64,
    pub reason: String,
}

/// Final state of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    tally: GenreTally,
    occurrences: usize,
    skipped: Vec<SkippedLookup>,
}

impl AggregationResult {
    pub fn new(tally: GenreTally, occurrences: usize, skipped: Vec<SkippedLookup>) -> Self {
        AggregationResult {
            tally,
            occurrences,
            skipped,
        }
    }

    pub fn tally(&self) -> &GenreTally {
        &self.tally
    }

    /// Sum of all genre hits; the denominator for percentages.
    pub fn total(&self) -> u64 {
        self.tally.total()
    }

    /// Artist occurrences found in the playlist, skipped ones included.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn skipped(&self) -> &[SkippedLookup] {
        &self.skipped
    }

    pub fn skipped_occurrences(&self) -> u64 {
        self.skipped.iter().map(|s| s.occurrences).sum()
    }
}
