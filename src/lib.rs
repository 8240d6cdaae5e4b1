pub mod analyzer;
pub mod config;
pub mod error;
pub mod sequence;

// Re-exports
pub use analyzer::{ParseError, ParseResult, Parser, ParserFamily};
pub use error::*;
pub use sequence::{CharView, FixedCharSequence, StaticSequence};
