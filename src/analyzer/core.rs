//! # Core Parser Definitions
//!
//! This module defines the parser contract, the family discriminant that
//! classifies parser types, and the no-match error returned by parsing.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::error::DefinitionError;

/// Parser trait defines the contract every matcher satisfies to be composable.
///
/// A parser is a stateless, default-constructible value. Combinators build
/// their children with `P::default()` and rely on the parser being a pure
/// function of its type. [`check_conformance`](super::conformance::check_conformance)
/// verifies the properties the type system cannot express.
///
/// Input is a character slice with a current position, and a successful parse
/// returns the position after the match together with the parsed value.
pub trait Parser: Default {
    /// Category of this parser.
    const FAMILY: ParserFamily;

    /// Whether the type's compile-time definition is well formed.
    ///
    /// Parsers whose definition carries an invariant, such as a sorted
    /// character set, override this together with [`Parser::definition_error`].
    const WELL_DEFINED: bool = true;

    /// Value produced by a successful parse.
    type Output;

    /// Attempts to match at `pos`.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - If the match succeeds
    /// * `Err(error)` - If it does not; this is an ordinary negative result
    fn parse(&self, input: &[char], pos: usize) -> ParseResult<Self::Output>;

    /// Determines whether the parser could match at `pos` without committing.
    ///
    /// On success the returned position is `pos` itself.
    fn lookahead(&self, input: &[char], pos: usize) -> ParseResult<()>;

    /// Why the definition is malformed, if it is.
    fn definition_error() -> Option<DefinitionError> {
        None
    }

    fn matches(&self, input: &[char], pos: usize) -> bool {
        self.parse(input, pos).is_ok()
    }

    /// Parses a string from its first character.
    fn parse_str(&self, input: &str) -> ParseResult<Self::Output> {
        let chars: Vec<char> = input.chars().collect();
        self.parse(&chars, 0)
    }
}

/// Result type for parsing operations.
///
/// On success, returns a tuple of the new position and the parsed value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Why a parser did not match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before the match could complete
    #[error("EOF at position {position}")]
    EOF { position: usize },
    /// A character did not satisfy the parser
    #[error("Unexpected: expected {expected}, found {found:?} at position {position}")]
    Unexpected {
        expected: String,
        found: char,
        position: usize,
    },
}

impl ParseError {
    pub fn unexpected<S: Into<String>>(expected: S, found: char, position: usize) -> Self {
        ParseError::Unexpected {
            expected: expected.into(),
            found,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        match self {
            ParseError::EOF { position } => *position,
            ParseError::Unexpected { position, .. } => *position,
        }
    }
}

/// Category a parser type belongs to.
///
/// The raw discriminants are bounded by two reserved sentinels,
/// [`ParserFamily::NONE`] and [`ParserFamily::END`]; only the values strictly
/// between them name a family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ParserFamily {
    /// Primitive character matchers
    Basic = 1,
    /// Parsers that run children in order
    Sequence = 2,
    /// Parsers that pick between children
    Choice = 3,
    /// Parsers that apply a child repeatedly
    Repeat = 4,
}

impl ParserFamily {
    /// Lower sentinel, never a family.
    pub const NONE: u8 = 0;
    /// Upper sentinel, one past the last family.
    pub const END: u8 = 5;

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn is_valid_raw(raw: u8) -> bool {
        raw > Self::NONE && raw < Self::END
    }

    pub fn from_raw(raw: u8) -> Result<Self, DefinitionError> {
        if !Self::is_valid_raw(raw) {
            return Err(DefinitionError::InvalidFamily(raw));
        }
        Self::iter()
            .find(|family| family.raw() == raw)
            .ok_or(DefinitionError::InvalidFamily(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(
            ParserFamily::from_raw(ParserFamily::NONE),
            Err(DefinitionError::InvalidFamily(0))
        );
        assert_eq!(
            ParserFamily::from_raw(ParserFamily::END),
            Err(DefinitionError::InvalidFamily(5))
        );
        assert_eq!(
            ParserFamily::from_raw(200),
            Err(DefinitionError::InvalidFamily(200))
        );
        assert_eq!(ParserFamily::from_raw(1), Ok(ParserFamily::Basic));
        assert_eq!(ParserFamily::from_raw(4), Ok(ParserFamily::Repeat));
    }

    #[test]
    fn test_every_family_inside_sentinels() {
        for family in ParserFamily::iter() {
            assert!(ParserFamily::is_valid_raw(family.raw()));
            assert_eq!(ParserFamily::from_raw(family.raw()), Ok(family));
        }
        assert_eq!(
            ParserFamily::iter().count(),
            (ParserFamily::END - ParserFamily::NONE - 1) as usize
        );
    }

    #[test]
    fn test_family_names() {
        assert_eq!(ParserFamily::Basic.to_string(), "basic");
        assert_eq!(ParserFamily::Choice.as_ref(), "choice");
        assert_eq!(
            ParserFamily::from_str("repeat"),
            Ok(ParserFamily::Repeat)
        );
        assert!(ParserFamily::from_str("none").is_err());
        assert_eq!(
            serde_json::to_string(&ParserFamily::Sequence).unwrap(),
            "\"sequence\""
        );
    }

    #[test]
    fn test_parse_error_position() {
        assert_eq!(ParseError::EOF { position: 3 }.get_position(), 3);
        assert_eq!(ParseError::unexpected("'a'", 'b', 7).get_position(), 7);
        assert_eq!(
            ParseError::unexpected("'a'", 'b', 7).to_string(),
            "Unexpected: expected 'a', found 'b' at position 7"
        );
    }
}
