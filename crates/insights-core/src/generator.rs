//! Synthetic daily price/volume series.
//!
//! Each step multiplies the running price by `1 + delta` with
//! `delta = (u - 0.5) * volatility + drift_bias`, rounds to cents and clamps
//! at [`PRICE_FLOOR`]. The first point carries the instrument's starting price
//! unchanged; the series always ends on the generator's end date.

use tracing::{debug, warn};

use crate::analytics::round_cents;
use crate::random::RandomSource;
use crate::{InsightsError, InstrumentSpec, PricePoint, SeriesDate, SeriesResult};

/// Small upward bias applied on every step.
pub const DRIFT_BIAS: f64 = 0.0002;

/// Lowest price a generated point may carry.
pub const PRICE_FLOOR: f64 = 0.01;

/// Inclusive lower bound of generated daily volume.
pub const VOLUME_MIN: u64 = 1_000_000;

/// Exclusive upper bound of generated daily volume.
pub const VOLUME_MAX: u64 = 11_000_000;

/// Generates one [`SeriesResult`] per call. Holds no randomness itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGenerator {
    drift_bias: f64,
    end_date: Option<SeriesDate>,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            drift_bias: DRIFT_BIAS,
            end_date: None,
        }
    }
}

impl SeriesGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drift_bias(mut self, drift_bias: f64) -> Self {
        self.drift_bias = drift_bias;
        self
    }

    /// Pin the last date of every series instead of using today (UTC).
    pub fn with_end_date(mut self, end_date: SeriesDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn drift_bias(&self) -> f64 {
        self.drift_bias
    }

    pub fn end_date(&self) -> Option<SeriesDate> {
        self.end_date
    }

    /// Produce `days + 1` points ending on the end date, oldest first.
    pub fn generate<R>(
        &self,
        spec: &InstrumentSpec,
        days: i64,
        rng: &mut R,
    ) -> Result<SeriesResult, InsightsError>
    where
        R: RandomSource + ?Sized,
    {
        if days < 0 {
            return Err(InsightsError::invalid(
                "days",
                format!("must be >= 0, got {days}"),
            ));
        }
        spec.validate()?;
        if !self.drift_bias.is_finite() {
            return Err(InsightsError::invalid("drift_bias", "must be finite"));
        }

        let end = self.end_date.unwrap_or_else(SeriesDate::today);
        let mut date = end.checked_sub_days(days).ok_or_else(|| {
            InsightsError::invalid("days", format!("{days} days before {end} is out of range"))
        })?;
        let capacity = usize::try_from(days)
            .ok()
            .and_then(|days| days.checked_add(1))
            .ok_or_else(|| InsightsError::invalid("days", format!("{days} is too large")))?;

        let mut points = Vec::with_capacity(capacity);
        let mut price = clamp_to_floor(round_cents(spec.initial_price));

        for step in 0..=days {
            if step > 0 {
                let u = rng.next_uniform();
                let delta = (u - 0.5) * spec.volatility + self.drift_bias;
                let next = round_cents(price * (1.0 + delta));
                if !next.is_finite() || next < PRICE_FLOOR {
                    warn!(
                        ticker = %spec.ticker,
                        step,
                        previous = price,
                        candidate = next,
                        "price left the representable range; clamping to floor"
                    );
                }
                price = clamp_to_floor(next);

                date = date.next_day().ok_or_else(|| {
                    InsightsError::invalid("days", format!("calendar overflow after {date}"))
                })?;
            }

            points.push(PricePoint {
                date,
                price,
                volume: draw_volume(rng),
            });
        }

        let series = SeriesResult::from_points(spec, points)?;
        debug!(
            ticker = %series.ticker(),
            days,
            current_price = series.current_price(),
            percent_change = series.percent_change(),
            "generated series"
        );
        Ok(series)
    }
}

fn clamp_to_floor(price: f64) -> f64 {
    if price.is_finite() && price >= PRICE_FLOOR {
        price
    } else {
        PRICE_FLOOR
    }
}

fn draw_volume<R>(rng: &mut R) -> u64
where
    R: RandomSource + ?Sized,
{
    let span = VOLUME_MAX - VOLUME_MIN;
    let u = rng.next_uniform().clamp(0.0, 1.0);
    let offset = (u * span as f64).floor() as u64;
    VOLUME_MIN + offset.min(span - 1)
}
