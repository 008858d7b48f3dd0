//! pidigits Patterns
//!
//! Textual analysis of a digit string:
//! - `find_repeating_patterns`: every substring seen at two or more offsets
//! - `unique_patterns`: distinct pattern strings, longest first
//! - `Extremes`: smallest / largest patterns and their numeric product
//! - `derive_remainder`: the digits left once every pattern is stripped
//! - `analyze`: all of the above in sequence

mod analyze;
mod remainder;
mod scan;
mod select;

pub use analyze::{analyze, AnalysisResult};
pub use remainder::derive_remainder;
pub use scan::{find_repeating_patterns, PatternRecord};
pub use select::{parse_float_prefix, unique_patterns, valid_patterns, Extremes};
