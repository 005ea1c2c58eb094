//! Behavior-driven tests for movers, search and selection
//!
//! These tests verify how analyzed series are ranked, looked up by ticker
//! fragment and focused for detail display.

use insights_core::{
    search, top_movers, Direction, ErrorKind, InsightsBoard, InsightsConfig, InstrumentCatalog,
    SelectionState, Universe,
};
use insights_tests::{pinned_generator, series_with_change};

fn tickers(list: &[&insights_core::SeriesResult]) -> Vec<String> {
    list.iter().map(|s| s.ticker().to_string()).collect()
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn when_gainers_tie_ticker_order_breaks_the_tie() {
    // Given: Two instruments tied at +5% and one loser
    let universe = vec![
        series_with_change("BBB", 5.0),
        series_with_change("AAA", 5.0),
        series_with_change("CCC", -2.0),
    ];

    // When: The top two gainers are requested
    let top = top_movers(&universe, Direction::Gainers, 2).expect("valid n");

    // Then: The tie resolves alphabetically
    assert_eq!(tickers(&top), vec!["AAA", "BBB"]);
}

#[test]
fn when_losers_requested_most_negative_comes_first() {
    let universe = vec![
        series_with_change("BBB", 5.0),
        series_with_change("AAA", 5.0),
        series_with_change("CCC", -2.0),
    ];

    let top = top_movers(&universe, Direction::Losers, 3).expect("valid n");

    assert_eq!(tickers(&top), vec!["CCC", "AAA", "BBB"]);
}

#[test]
fn when_n_is_zero_or_negative_ranking_is_empty_or_rejected() {
    let universe = vec![series_with_change("AAA", 1.0)];

    assert!(top_movers(&universe, Direction::Gainers, 0).expect("zero").is_empty());
    let err = top_movers(&universe, Direction::Gainers, -3).expect_err("negative");
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn when_ranking_runs_input_order_is_untouched() {
    let universe = vec![series_with_change("BBB", 1.0), series_with_change("AAA", 9.0)];

    let _ = top_movers(&universe, Direction::Gainers, 2).expect("valid n");

    assert_eq!(universe[0].ticker().as_str(), "BBB");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn when_query_differs_in_case_search_still_matches() {
    let universe = vec![series_with_change("AAPL", 1.0), series_with_change("MSFT", 1.0)];

    assert_eq!(tickers(&search(&universe, "aapl")), vec!["AAPL"]);
    assert!(search(&universe, "").is_empty());
    assert!(search(&universe, "ZZZ").is_empty());
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn when_unknown_ticker_selected_not_found_is_returned() {
    // Given: A populated universe and an existing selection
    let universe = Universe::from_series(vec![series_with_change("AAPL", 1.0)]);
    let mut selection = SelectionState::new();
    selection.select(&universe, "AAPL").expect("present");

    // When: An unknown ticker is selected
    let err = selection.select(&universe, "NOPE").expect_err("missing");

    // Then: NotFound is reported and the previous selection survives
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(selection.ticker().map(|t| t.as_str()), Some("AAPL"));
}

#[test]
fn when_board_searches_first_match_becomes_selected() {
    // Given: A seeded board over the standard catalog
    let mut board = InsightsBoard::with_generator(
        InstrumentCatalog::standard().expect("catalog"),
        InsightsConfig::default().with_seed(Some(5)),
        pinned_generator(),
    )
    .expect("board");

    // When: The user searches for a crypto fragment
    let found = tickers(&board.search("et"));

    // Then: ETH and META match in universe order and META is focused
    assert_eq!(found, vec!["META", "ETH"]);
    assert_eq!(board.selected().map(|s| s.ticker().as_str()), Some("META"));
}
