use crate::{genres::tally::AggregationResult, types::RankedGenre};

/// Ranks the genres of an aggregation by their share of all genre hits.
///
/// Genres are ordered by count, highest first; equal counts keep the tally's
/// genre-name order. An aggregation without any genre hits yields an empty
/// list.
pub fn build(result: &AggregationResult) -> Vec<RankedGenre> {
    let total = result.total();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedGenre> = result
        .tally()
        .iter()
        .map(|(genre, count)| RankedGenre {
            genre: genre.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    // stable: ties stay in genre-name order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// `count / total * 100`, rounded half away from zero to two decimals.
///
/// Rounding happens on integer hundredths of a percent, so ties such as
/// `23 / 4000 = 0.575%` round up even where the quotient has no exact binary
/// representation. A zero `total` yields `0.0`.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as u128;
    let hundredths = (count as u128 * 20_000 + total) / (2 * total);
    hundredths as f64 / 100.0
}
