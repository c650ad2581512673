pub mod format;

pub use format::{format_inr, format_number, format_percentage, format_with_unit};
