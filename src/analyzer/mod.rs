//! # Analyzer (Parser) System
//!
//! Parsers built on fixed character sequences, following a parser combinator
//! design. Everything here is defined statically: a parser's behavior is fully
//! determined by its type.
//!
//! ## Core Components
//!
//! * **Parser Trait**: The contract every composable parser satisfies
//! * **Matchers**: The primitive `AnyOf`, `NoneOf` and `AllOf` parsers
//! * **Conformance**: Checks a combinator applies before accepting a parser type
//!
//! ## Usage Example
//!
//! ```
//! use tokn::analyzer::prelude::*;
//! use tokn::analyzer::Parser;
//! use tokn::static_sequence;
//!
//! static_sequence!(Sign = "+-");
//!
//! let parser = any_of::<Sign>();
//! let input: Vec<char> = "-42".chars().collect();
//! assert_eq!(parser.parse(&input, 0), Ok((1, '-')));
//! ```

pub mod conformance;
pub mod core;
pub mod matchers;
pub mod prelude;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
pub use self::core::ParserFamily;
