//! # Domain Models
//!
//! Canonical types shared by the generator, analytics, ranking and search.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Validated, uppercase instrument identifier |
//! | [`Category`] | Display grouping (index, equity, crypto) |
//! | [`InstrumentSpec`] | Starting price and volatility of one instrument |
//! | [`SeriesDate`] | Calendar day of a price point |
//! | [`PricePoint`] | One generated day: date, price, volume |
//! | [`SeriesResult`] | Generated series plus derived metrics |
//!
//! Construction validates invariants; see [`InsightsError`](crate::InsightsError).

mod date;
mod instrument;
mod series;
mod ticker;

pub use date::SeriesDate;
pub use instrument::{Category, InstrumentSpec};
pub use series::{PricePoint, SeriesResult};
pub use ticker::Ticker;
