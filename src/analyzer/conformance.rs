//! # Parser Conformance
//!
//! Checks that a type implementing [`Parser`] honors the parts of the contract
//! the trait alone cannot express: its definition is well formed
//! ([`Parser::WELL_DEFINED`]) and the type carries no per-instance state.
//!
//! Default construction, the declared `Output` type and both `parse` and
//! `lookahead` are required by the trait itself, so a type missing any of
//! them is not a parser at all:
//!
//! ```compile_fail
//! use tokn::analyzer::{ParseResult, Parser, ParserFamily};
//!
//! #[derive(Default)]
//! struct ParseOnly;
//!
//! impl Parser for ParseOnly {
//!     const FAMILY: ParserFamily = ParserFamily::Basic;
//!     type Output = ();
//!
//!     fn parse(&self, _input: &[char], pos: usize) -> ParseResult<()> {
//!         Ok((pos, ()))
//!     }
//! }
//! ```
//!
//! Statelessness is checked at compile time by [`assert_parser`]:
//!
//! ```compile_fail
//! use tokn::analyzer::conformance::assert_parser;
//! use tokn::analyzer::{ParseResult, Parser, ParserFamily};
//!
//! #[derive(Default)]
//! struct Counting {
//!     seen: usize,
//! }
//!
//! impl Parser for Counting {
//!     const FAMILY: ParserFamily = ParserFamily::Basic;
//!     type Output = ();
//!
//!     fn parse(&self, _input: &[char], pos: usize) -> ParseResult<()> {
//!         Ok((pos + self.seen, ()))
//!     }
//!
//!     fn lookahead(&self, _input: &[char], pos: usize) -> ParseResult<()> {
//!         Ok((pos, ()))
//!     }
//! }
//!
//! const _: () = assert_parser::<Counting>();
//! ```
//!
//! and set matchers reject malformed sets the same way:
//!
//! ```compile_fail
//! use tokn::analyzer::matchers::AnyOf;
//! use tokn::static_sequence;
//!
//! static_sequence!(Ba = "ba");
//!
//! const _: AnyOf<Ba> = AnyOf::new();
//! ```
//!
//! The gate itself sees the malformed set, without constructing a value:
//!
//! ```compile_fail
//! use tokn::analyzer::conformance::assert_parser;
//! use tokn::analyzer::matchers::AnyOf;
//! use tokn::static_sequence;
//!
//! static_sequence!(Ba = "ba");
//!
//! const _: () = assert_parser::<AnyOf<Ba>>();
//! ```
//!
//! A conforming parser passes both checks:
//!
//! ```
//! use tokn::analyzer::conformance::{assert_parser, check_conformance};
//! use tokn::analyzer::matchers::AnyOf;
//! use tokn::analyzer::ParserFamily;
//! use tokn::static_sequence;
//!
//! static_sequence!(Ab = "ab");
//!
//! const _: () = assert_parser::<AnyOf<Ab>>();
//!
//! let report = check_conformance::<AnyOf<Ab>>().unwrap();
//! assert_eq!(report.family, ParserFamily::Basic);
//! assert_eq!(report.output, "char");
//! ```

use std::any::type_name;
use std::marker::PhantomData;
use std::mem::size_of;

use tracing::{debug, trace};

use super::core::{Parser, ParserFamily};
use crate::config::ConformanceConfig;
use crate::error::DefinitionError;

/// Outcome of a successful conformance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    pub parser: &'static str,
    pub family: ParserFamily,
    pub output: &'static str,
}

pub const fn is_stateless<P>() -> bool {
    size_of::<P>() == 0
}

struct Requirements<P>(PhantomData<P>);

impl<P: Parser> Requirements<P> {
    const HOLD: () = {
        assert!(P::WELL_DEFINED, "parser definition is malformed");
        assert!(is_stateless::<P>(), "parsers must not carry per-instance state");
    };
}

/// Compile-time conformance gate for generic code accepting any parser.
///
/// Evaluate it in a const context, or call it from a generic constructor, to
/// reject non-conforming types before any parsing happens.
pub const fn assert_parser<P: Parser>() {
    #[allow(clippy::let_unit_value)]
    let () = Requirements::<P>::HOLD;
}

/// Checks `P` against the default policy.
pub fn check_conformance<P: Parser>() -> Result<Conformance, DefinitionError> {
    check_conformance_with::<P>(&ConformanceConfig::default())
}

/// Checks `P` against a host policy.
pub fn check_conformance_with<P: Parser>(
    config: &ConformanceConfig,
) -> Result<Conformance, DefinitionError> {
    let parser = type_name::<P>();
    let family = P::FAMILY;

    if let Some(error) = P::definition_error() {
        debug!(parser, %error, "rejected malformed parser definition");
        return Err(error);
    }

    let rejection = if !config.allowed_families.contains(&family) {
        Some(format!("family `{}` is not allowed", family))
    } else if config.require_stateless && !is_stateless::<P>() {
        Some(format!(
            "carries {} bytes of per-instance state",
            size_of::<P>()
        ))
    } else {
        None
    };

    if let Some(reason) = rejection {
        debug!(parser, %reason, "rejected non-conforming parser");
        return Err(DefinitionError::NonConformingParser { parser, reason });
    }

    let report = Conformance {
        parser,
        family,
        output: type_name::<P::Output>(),
    };
    trace!(parser, family = %family, output = report.output, "parser conforms");
    Ok(report)
}
