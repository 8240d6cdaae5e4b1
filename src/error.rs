use thiserror::Error;

use crate::analyzer::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),
    // no-match surfaced through `?` in caller code
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}

/// Errors in how a parser type is defined.
///
/// These are programmer errors: they are raised when a matcher is constructed
/// or a parser type is admitted, never while parsing input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A set-based matcher was defined over characters that are not strictly increasing.
    #[error("Invalid character set for {matcher}: {sequence:?} is not sorted and deduplicated")]
    InvalidCharacterSet {
        matcher: &'static str,
        sequence: String,
    },
    /// A type failed one of the structural parser requirements.
    #[error("Non-conforming parser {parser}: {reason}")]
    NonConformingParser {
        parser: &'static str,
        reason: String,
    },
    /// A raw family discriminant outside the valid range.
    #[error("Invalid parser family discriminant: {0}")]
    InvalidFamily(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Length mismatch: expected {expected} characters, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::FixedCharSequence;

    fn parse_pair(text: &str) -> InternalResult<FixedCharSequence<2>> {
        Ok(FixedCharSequence::try_new(text)?)
    }

    #[test]
    fn test_sequence_error_converts() {
        match parse_pair("abc") {
            Err(Error::Sequence(SequenceError::LengthMismatch { expected, found })) => {
                assert_eq!((expected, found), (2, 3));
            }
            other => panic!("expected sequence error, got {:?}", other),
        }
        assert!(parse_pair("ab").is_ok());
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("Failed to parse config: eof");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Config error: Failed to parse config: eof");
    }
}
