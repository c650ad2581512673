//! Supply-chain profitability and break-even library
//!
//! This crate models a single-product supply chain with user-editable formulas:
//! - Builtin operational inputs with linked production/sales/inventory volumes
//! - Custom named parameters usable inside formulas
//! - A small arithmetic expression language (`+ - * / ^`, parentheses, identifiers)
//! - A formula registry seeded with revenue, cost, emissions and profit formulas
//! - Profit deductions applied to the total-cost and net-profit headline
//! - A sales-percentage sensitivity sweep with interpolated break-even points
//! - Operational limit checks
//!
//! # Builder DSL
//!
//! Use the fluent builder API to assemble a scenario:
//!
//! ```ignore
//! use breakeven_core::{ScenarioBuilder, FormulaDraft, ParameterDraft};
//!
//! let session = ScenarioBuilder::new()
//!     .selling_price(42_000.0)
//!     .production(55_000.0)
//!     .sales_percent(90.0)
//!     .parameter(ParameterDraft::new("royaltyRate", "2").unit("%"))
//!     .formula(
//!         FormulaDraft::new("Royalty", "sellingPrice * salesVolume * royaltyRate / 100")
//!             .subtract_from_profit(),
//!     )
//!     .build_session()?;
//!
//! println!("net profit: {}", session.derived().evaluation.headline.net_profit);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod analysis;
pub mod constraints;
pub mod context;
pub mod error;
pub mod expression;
pub mod state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{Aggregator, evaluate_all};
pub use analysis::{SweepConfig, break_even_points, sales_sweep};
pub use config::ScenarioBuilder;
pub use context::EvaluationContext;
pub use error::{EvalError, FormulaError, ParameterError, ScenarioError, SweepConfigError};
pub use expression::{Expression, evaluate};
pub use model::{
    AnalysisPoint, Evaluation, FormulaDraft, FormulaId, FormulaRegistry, Headline, InputField,
    Limits, OperationalInputs, ParameterDraft, ParameterStore, SeededFormula,
};
pub use state::{AppState, DerivedState, Session, recompute};
