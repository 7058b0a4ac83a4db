use spogenre::genres::{AggregationResult, GenreTally, SkippedLookup, report};

fn result_from(counts: &[(&str, u64)]) -> AggregationResult {
    let mut tally = GenreTally::new();
    for (genre, count) in counts {
        tally.record(&[*genre], *count);
    }
    AggregationResult::new(tally, 0, Vec::new())
}

#[test]
fn test_tally_record_keeps_total_in_sync() {
    let mut tally = GenreTally::new();
    tally.record(&["pop", "rock"], 1);
    tally.record(&["pop"], 2);
    tally.record::<&str>(&[], 5);

    assert_eq!(tally.get("pop"), 3);
    assert_eq!(tally.get("rock"), 1);
    assert_eq!(tally.total(), 4);
    assert_eq!(tally.len(), 2);

    // genre names are case-sensitive
    tally.record(&["Pop"], 1);
    assert_eq!(tally.len(), 3);
    assert_eq!(tally.get("pop"), 3);
}

#[test]
fn test_build_orders_by_count_descending() {
    let result = result_from(&[("rock", 2), ("pop", 3)]);
    let ranked = report::build(&result);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].genre, "pop");
    assert_eq!(ranked[0].count, 3);
    assert_eq!(ranked[0].percentage, 60.0);
    assert_eq!(ranked[1].genre, "rock");
    assert_eq!(ranked[1].count, 2);
    assert_eq!(ranked[1].percentage, 40.0);
}

#[test]
fn test_build_breaks_ties_by_genre_name() {
    let result = result_from(&[("techno", 2), ("ambient", 2), ("house", 5), ("dub", 2)]);
    let order: Vec<String> = report::build(&result)
        .into_iter()
        .map(|g| g.genre)
        .collect();

    assert_eq!(order, vec!["house", "ambient", "dub", "techno"]);
}

#[test]
fn test_build_with_zero_total_is_empty() {
    assert!(report::build(&AggregationResult::default()).is_empty());

    // every lookup skipped: nothing to rank, no division by zero
    let skipped = AggregationResult::new(
        GenreTally::new(),
        2,
        vec![SkippedLookup {
            artist_id: "A".to_string(),
            occurrences: 2,
            reason: "gone".to_string(),
        }],
    );
    assert!(report::build(&skipped).is_empty());
}

#[test]
fn test_percentage_rounds_to_two_decimals() {
    assert_eq!(report::percentage(1, 3), 33.33);
    assert_eq!(report::percentage(2, 3), 66.67);
    assert_eq!(report::percentage(1, 6), 16.67);
    assert_eq!(report::percentage(1, 8), 12.5);
    assert_eq!(report::percentage(7, 7), 100.0);
}

#[test]
fn test_percentage_rounds_half_away_from_zero() {
    // 1/32 = 3.125% exactly
    assert_eq!(report::percentage(1, 32), 3.13);

    // ties without an exact binary representation
    assert_eq!(report::percentage(23, 4000), 0.58);
    assert_eq!(report::percentage(41, 4000), 1.03);
    assert_eq!(report::percentage(1287, 4000), 32.18);
}

#[test]
fn test_percentage_of_zero_total_is_zero() {
    assert_eq!(report::percentage(0, 0), 0.0);
}

#[test]
fn test_percentages_sum_within_rounding_tolerance() {
    let result = result_from(&[("a", 1), ("b", 1), ("c", 1), ("d", 4), ("e", 5)]);
    let ranked = report::build(&result);

    let sum: f64 = ranked.iter().map(|g| g.percentage).sum();
    assert!((sum - 100.0).abs() <= 0.01 * ranked.len() as f64 + 1e-9);
}
