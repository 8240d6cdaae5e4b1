//! # Primitive Matchers
//!
//! The basic parsers every composite parser is built from. Each is a zero-sized
//! value generic over a [`StaticSequence`]:
//!
//! * [`AnyOf`]: matches one character that is a member of the set
//! * [`NoneOf`]: matches one character that is not a member of the set
//! * [`AllOf`]: matches the whole sequence as a literal
//!
//! `AnyOf` and `NoneOf` require the set to be sorted and deduplicated.
//! Constructing them with `new()` (or `Default`) rejects a malformed set at
//! compile time, while `try_new()` performs the same check at runtime.
//!
//! Each matcher also offers a `const fn accepts`, the boolean form of `parse`.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::core::{ParseError, ParseResult, Parser, ParserFamily};
use crate::error::DefinitionError;
use crate::sequence::StaticSequence;

fn malformed_set<S: StaticSequence>(matcher: &'static str) -> DefinitionError {
    debug!(matcher, sequence = S::TEXT, "rejected malformed character set");
    DefinitionError::InvalidCharacterSet {
        matcher,
        sequence: S::TEXT.to_string(),
    }
}

/// AnyOf: Matches a single character contained in the set `S`
///
/// On success it consumes one character and returns it.
pub struct AnyOf<S> {
    _sequence: PhantomData<S>,
}

impl<S: StaticSequence> AnyOf<S> {
    const VALID_SET: () = assert!(
        S::SEQUENCE.is_sorted_set(),
        "AnyOf requires a sorted, deduplicated character set"
    );

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SET;
        Self {
            _sequence: PhantomData,
        }
    }

    pub fn try_new() -> Result<Self, DefinitionError> {
        if S::SEQUENCE.is_sorted_set() {
            Ok(Self {
                _sequence: PhantomData,
            })
        } else {
            Err(malformed_set::<S>("AnyOf"))
        }
    }

    /// True iff the input is non-empty and its first character is in the set.
    pub const fn accepts(input: &[char]) -> bool {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SET;
        !input.is_empty() && S::SEQUENCE.contains(input[0])
    }
}

impl<S: StaticSequence> Parser for AnyOf<S> {
    const FAMILY: ParserFamily = ParserFamily::Basic;
    const WELL_DEFINED: bool = S::SEQUENCE.is_sorted_set();
    type Output = char;

    fn definition_error() -> Option<DefinitionError> {
        Self::try_new().err()
    }

    fn parse(&self, input: &[char], pos: usize) -> ParseResult<char> {
        match input.get(pos) {
            Some(&c) if S::SEQUENCE.contains(c) => Ok((pos + 1, c)),
            Some(&c) => Err(ParseError::unexpected(
                format!("any of {:?}", S::TEXT),
                c,
                pos,
            )),
            None => Err(ParseError::EOF { position: pos }),
        }
    }

    fn lookahead(&self, input: &[char], pos: usize) -> ParseResult<()> {
        self.parse(input, pos).map(|_| (pos, ()))
    }
}

/// NoneOf: Matches a single character not contained in the set `S`
///
/// Exhausted input never matches.
pub struct NoneOf<S> {
    _sequence: PhantomData<S>,
}

impl<S: StaticSequence> NoneOf<S> {
    const VALID_SET: () = assert!(
        S::SEQUENCE.is_sorted_set(),
        "NoneOf requires a sorted, deduplicated character set"
    );

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SET;
        Self {
            _sequence: PhantomData,
        }
    }

    pub fn try_new() -> Result<Self, DefinitionError> {
        if S::SEQUENCE.is_sorted_set() {
            Ok(Self {
                _sequence: PhantomData,
            })
        } else {
            Err(malformed_set::<S>("NoneOf"))
        }
    }

    /// True iff the input is non-empty and its first character is not in the set.
    pub const fn accepts(input: &[char]) -> bool {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SET;
        !input.is_empty() && !S::SEQUENCE.contains(input[0])
    }
}

impl<S: StaticSequence> Parser for NoneOf<S> {
    const FAMILY: ParserFamily = ParserFamily::Basic;
    const WELL_DEFINED: bool = S::SEQUENCE.is_sorted_set();
    type Output = char;

    fn definition_error() -> Option<DefinitionError> {
        Self::try_new().err()
    }

    fn parse(&self, input: &[char], pos: usize) -> ParseResult<char> {
        match input.get(pos) {
            Some(&c) if !S::SEQUENCE.contains(c) => Ok((pos + 1, c)),
            Some(&c) => Err(ParseError::unexpected(
                format!("none of {:?}", S::TEXT),
                c,
                pos,
            )),
            None => Err(ParseError::EOF { position: pos }),
        }
    }

    fn lookahead(&self, input: &[char], pos: usize) -> ParseResult<()> {
        self.parse(input, pos).map(|_| (pos, ()))
    }
}

/// AllOf: Matches the sequence `S` verbatim
///
/// There is no ordering requirement on `S`. On success it consumes the whole
/// literal and returns its text.
pub struct AllOf<S> {
    _sequence: PhantomData<S>,
}

impl<S: StaticSequence> AllOf<S> {
    pub const fn new() -> Self {
        Self {
            _sequence: PhantomData,
        }
    }

    /// True iff the input begins with the literal.
    pub const fn accepts(input: &[char]) -> bool {
        S::SEQUENCE.is_prefix_of(input)
    }
}

impl<S: StaticSequence> Parser for AllOf<S> {
    const FAMILY: ParserFamily = ParserFamily::Basic;
    type Output = &'static str;

    fn parse(&self, input: &[char], pos: usize) -> ParseResult<&'static str> {
        let rest = input.get(pos..).unwrap_or(&[]);
        for (offset, &expected) in S::SEQUENCE.as_slice().iter().enumerate() {
            match rest.get(offset) {
                Some(&c) if c == expected => {}
                Some(&c) => {
                    return Err(ParseError::unexpected(
                        format!("{:?}", S::TEXT),
                        c,
                        pos + offset,
                    ))
                }
                None => {
                    return Err(ParseError::EOF {
                        position: pos + offset,
                    })
                }
            }
        }
        Ok((pos + S::SEQUENCE.size(), S::TEXT))
    }

    fn lookahead(&self, input: &[char], pos: usize) -> ParseResult<()> {
        self.parse(input, pos).map(|_| (pos, ()))
    }
}

// Hand-written so the impls do not pick up bounds on `S`, and so `Default`
// goes through the checked constructor.
macro_rules! impl_matcher_traits {
    ($($matcher:ident),*) => {
        $(
            impl<S: StaticSequence> Default for $matcher<S> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<S> Clone for $matcher<S> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<S> Copy for $matcher<S> {}

            impl<S> PartialEq for $matcher<S> {
                fn eq(&self, _other: &Self) -> bool {
                    true
                }
            }

            impl<S> Eq for $matcher<S> {}

            impl<S: StaticSequence> fmt::Debug for $matcher<S> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($matcher)).field(&S::TEXT).finish()
                }
            }
        )*
    };
}

impl_matcher_traits!(AnyOf, NoneOf, AllOf);
