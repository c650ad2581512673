//! Integration tests for the breakeven engine
//!
//! Tests are organized by topic:
//! - `expression` - Parsing and evaluating formula expressions
//! - `registries` - Parameter store and formula registry edits
//! - `aggregation` - Per-formula results and the profit-adjusted headline
//! - `sweep` - Sales-percentage sweep and break-even interpolation
//! - `session` - Builder DSL, recomputation and session mutations

mod registries;
mod session;
mod sweep;

/// Relative float comparison for monetary totals
fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
