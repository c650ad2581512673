//! Scenario configuration
//!
//! A scenario is an [`AppState`](crate::state::AppState): builtin inputs, custom
//! parameters, formulas, limits and the sweep range. The builder DSL assembles one while
//! routing every parameter and formula through the same validation as interactive
//! edits.
//!
//! ```ignore
//! use breakeven_core::config::ScenarioBuilder;
//! use breakeven_core::model::{FormulaDraft, ParameterDraft};
//!
//! let state = ScenarioBuilder::new()
//!     .selling_price(42_000.0)
//!     .production(55_000.0)
//!     .sales_percent(90.0)
//!     .parameter(ParameterDraft::new("carbonTax", "150").unit("INR/t"))
//!     .formula(
//!         FormulaDraft::new("Carbon Tax", "carbonTax * co2EmissionFactor * productionVolume")
//!             .subtract_from_profit(),
//!     )
//!     .max_emissions(120_000.0)
//!     .build()?;
//! ```

pub mod builder;

pub use builder::ScenarioBuilder;
