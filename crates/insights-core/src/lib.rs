//! # Insights Core
//!
//! Market-data engine behind the dashboard's insights view: a synthetic
//! multi-instrument price/volume generator plus the analytics, ranking and
//! search built on top of it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Tickers, instrument specs, price points, series |
//! | [`catalog`] | Immutable instrument catalog and the standard presets |
//! | [`random`] | Injectable uniform random sources and seeding policy |
//! | [`generator`] | Synthetic daily series generation |
//! | [`analytics`] | Current price, change and percent change |
//! | [`ranking`] | Top-N gainers and losers |
//! | [`search`] | Case-insensitive ticker substring search |
//! | [`selection`] | Currently focused instrument |
//! | [`universe`] | Generated series for a whole catalog |
//! | [`board`] | Facade tying the above together |
//! | [`config`] | Defaults and environment overrides |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use insights_core::{Direction, InsightsBoard, InsightsConfig, InstrumentCatalog};
//!
//! let catalog = InstrumentCatalog::standard()?;
//! let mut board = InsightsBoard::new(catalog, InsightsConfig::default().with_seed(Some(7)))?;
//!
//! for series in board.top_movers(Direction::Gainers, 3)? {
//!     println!("{} {:+.2}%", series.ticker(), series.percent_change());
//! }
//!
//! let matches = board.search("aapl");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(board.selected().map(|s| s.ticker().as_str()), Some("AAPL"));
//! # Ok::<(), insights_core::InsightsError>(())
//! ```
//!
//! ## Determinism
//!
//! Generation draws only from the [`RandomSource`] it is handed and performs
//! no I/O. A seeded source, or [`Seeding::Fixed`] for a whole universe, yields
//! the same series every time for a given end date.

pub mod analytics;
pub mod board;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod random;
pub mod ranking;
pub mod search;
pub mod selection;
pub mod universe;

pub use analytics::{analyze, format_volume, round_cents, SeriesAnalytics};
pub use board::InsightsBoard;
pub use catalog::InstrumentCatalog;
pub use config::InsightsConfig;
pub use domain::{Category, InstrumentSpec, PricePoint, SeriesDate, SeriesResult, Ticker};
pub use error::{ErrorKind, InsightsError, Result};
pub use generator::{SeriesGenerator, DRIFT_BIAS, PRICE_FLOOR, VOLUME_MAX, VOLUME_MIN};
pub use random::{ConstantSource, FastRandSource, RandomSource, ScriptedSource, Seeding};
pub use ranking::{top_movers, Direction};
pub use search::search;
pub use selection::SelectionState;
pub use universe::Universe;
