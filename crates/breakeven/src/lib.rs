//! Supply-chain break-even calculator
//!
//! Command line front end over `breakeven_core`: loads YAML scenarios and settings from
//! the data directory, recomputes results, constraint checks and the sales sweep, and
//! renders them as text or JSON.

// ============================================================================
// Modules
// ============================================================================

pub mod commands;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use commands::{LimitsUpdate, OutputFormat};
pub use data::DataDirectory;
pub use logging::init_logging;
