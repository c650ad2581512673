//! Sensitivity analysis over the sales percentage.
//!
//! Each sample rebuilds the context with `salesVolume = production × p / 100` and
//! `inventoryVolume = production − salesVolume`, re-evaluates the headline (including
//! profit deductions) and records an [`AnalysisPoint`](crate::model::AnalysisPoint).
//! Samples are independent and may be computed in parallel with the `parallel` feature;
//! the break-even scan afterwards runs sequentially in ascending percentage order.
//!
//! ```ignore
//! use breakeven_core::aggregate::Aggregator;
//! use breakeven_core::analysis::{SweepConfig, sales_sweep, break_even_points};
//!
//! let aggregator = Aggregator::new(&registry);
//! let series = sales_sweep(&aggregator, &context, &SweepConfig::default());
//! for point in break_even_points(&series) {
//!     println!("break-even at {:.2}%", point.sales_percent);
//! }
//! ```

mod config;
mod interpolate;
mod sweep;

pub use config::*;
pub use interpolate::*;
pub use sweep::*;
