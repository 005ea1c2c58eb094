//! Summary metrics derived from a generated series.

use serde::{Deserialize, Serialize};

use crate::{InsightsError, PricePoint};

/// Endpoint-derived metrics of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalytics {
    pub current_price: f64,
    pub change: f64,
    pub percent_change: f64,
}

/// Derive current price, absolute change and percent change.
///
/// `current_price` is the last point's price; `change` and `percent_change`
/// are measured against `initial_price` and rounded to cents / hundredths of
/// a percent.
pub fn analyze(
    points: &[PricePoint],
    initial_price: f64,
) -> Result<SeriesAnalytics, InsightsError> {
    if !initial_price.is_finite() || initial_price <= 0.0 {
        return Err(InsightsError::invalid(
            "initial_price",
            format!("must be greater than zero, got {initial_price}"),
        ));
    }

    let last = points
        .last()
        .ok_or_else(|| InsightsError::invalid("points", "series must contain at least one point"))?;

    let current_price = last.price;
    let raw_change = current_price - initial_price;

    Ok(SeriesAnalytics {
        current_price,
        change: round_cents(raw_change),
        percent_change: round_cents(raw_change / initial_price * 100.0),
    })
}

/// Magnitude above which an `f64` has no fractional cents left to round.
const WHOLE_CENTS_LIMIT: f64 = 1e15;

/// Round to two decimal places, half away from zero.
///
/// Values at or beyond `1e15` are returned unchanged so scaling by 100 cannot
/// overflow to infinity.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= WHOLE_CENTS_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Compact volume rendering used by tables: `1.2B`, `3.4M`, `5.6K`.
pub fn format_volume(volume: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in UNITS {
        if volume >= scale {
            return format!("{:.1}{suffix}", volume as f64 / scale as f64);
        }
    }
    volume.to_string()
}
