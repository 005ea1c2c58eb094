//! Behavior-driven tests for series generation
//!
//! These tests verify how a single instrument's history is produced: its
//! length and dates, the compounding walk, and the derived metrics.

use insights_core::{
    Category, ConstantSource, ErrorKind, FastRandSource, InstrumentCatalog, ScriptedSource,
    SeriesDate, Seeding, Universe,
};
use insights_tests::{pinned_generator, spec};

// =============================================================================
// Generation: Shape
// =============================================================================

#[test]
fn when_thirty_days_requested_series_has_thirty_one_contiguous_points() {
    // Given: A generator pinned to 2025-10-18
    let generator = pinned_generator();
    let aapl = spec("AAPL", Category::Equity, 170.0, 0.015);

    // When: 30 days of history are generated
    let series = generator
        .generate(&aapl, 30, &mut FastRandSource::seeded(7))
        .expect("valid request");

    // Then: The series spans day-by-day up to the end date
    let points = series.points();
    assert_eq!(points.len(), 31);
    assert_eq!(points[0].date, SeriesDate::parse("2025-09-18").expect("date"));
    assert_eq!(points[30].date, SeriesDate::parse("2025-10-18").expect("date"));
    for pair in points.windows(2) {
        assert_eq!(pair[0].date.next_day(), Some(pair[1].date));
    }
}

#[test]
fn when_zero_days_requested_series_holds_only_the_unperturbed_start() {
    // Given: An instrument starting at 170.00
    let aapl = spec("AAPL", Category::Equity, 170.0, 0.015);

    // When: Zero days are generated
    let series = pinned_generator()
        .generate(&aapl, 0, &mut FastRandSource::seeded(1))
        .expect("valid request");

    // Then: The only point is the initial price and nothing has moved
    assert_eq!(series.points().len(), 1);
    assert_eq!(series.current_price(), 170.0);
    assert_eq!(series.change(), 0.0);
    assert_eq!(series.percent_change(), 0.0);
}

#[test]
fn when_negative_days_requested_generation_is_rejected() {
    let aapl = spec("AAPL", Category::Equity, 170.0, 0.015);

    let err = pinned_generator()
        .generate(&aapl, -1, &mut FastRandSource::seeded(1))
        .expect_err("negative days");

    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

// =============================================================================
// Generation: Compounding
// =============================================================================

#[test]
fn when_every_step_gains_one_percent_price_compounds() {
    // Given: A constant per-step delta of +0.01
    let generator = pinned_generator().with_drift_bias(0.01);
    let aapl = spec("AAPL", Category::Equity, 170.0, 0.015);

    // When: 30 days are generated
    let series = generator
        .generate(&aapl, 30, &mut ConstantSource(0.5))
        .expect("valid request");

    // Then: The result follows 170 * 1.01^30 within per-step rounding
    assert!((series.current_price() - 229.03).abs() < 0.15, "got {}", series.current_price());
    assert!((series.change() - 59.03).abs() < 0.15, "got {}", series.change());
    assert!((series.percent_change() - 34.72).abs() < 0.15, "got {}", series.percent_change());
    assert!(series.is_gaining());
}

#[test]
fn when_prices_collapse_they_stop_at_one_cent() {
    // Given: A near-total drop on every step
    let generator = pinned_generator().with_drift_bias(-0.95);
    let penny = spec("PENNY", Category::Equity, 1.0, 0.5);

    // When: A short series is generated
    let series = generator
        .generate(&penny, 5, &mut ScriptedSource::new(vec![0.0]))
        .expect("valid request");

    // Then: Every point stays at or above the floor
    assert!(series.points().iter().all(|p| p.price >= 0.01));
    assert_eq!(series.current_price(), 0.01);
}

// =============================================================================
// Universe: Reproducibility
// =============================================================================

#[test]
fn when_seed_is_fixed_regenerated_universe_is_identical() {
    // Given: The standard catalog and a fixed seed
    let catalog = InstrumentCatalog::standard().expect("catalog");
    let generator = pinned_generator();

    // When: The universe is generated twice
    let first = Universe::generate(&catalog, &generator, 30, Seeding::Fixed(99)).expect("first");
    let second = Universe::generate(&catalog, &generator, 30, Seeding::Fixed(99)).expect("second");

    // Then: Every series matches point for point
    assert_eq!(first.len(), 14);
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn when_seeds_differ_series_differ() {
    let catalog = InstrumentCatalog::standard().expect("catalog");
    let generator = pinned_generator();

    let first = Universe::generate(&catalog, &generator, 30, Seeding::Fixed(1)).expect("first");
    let second = Universe::generate(&catalog, &generator, 30, Seeding::Fixed(2)).expect("second");

    assert_ne!(first.as_slice(), second.as_slice());
}
