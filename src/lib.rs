pub mod binding;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API exports
pub use formatter::{format_number, format_str, format_value};
pub use locale::{LocaleError, LocaleGroup, LocaleTable};
pub use parser::{parse_format_pattern, parse_number};
pub use types::*;
