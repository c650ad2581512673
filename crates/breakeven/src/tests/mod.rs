//! Tests for the breakeven front end
//!
//! Tests are organized by topic:
//! - `format` - Indian-locale currency and number formatting
//! - `scenario` - YAML scenario parsing and conversion to application state
//! - `commands` - Subcommands against a temporary data directory

mod format;
