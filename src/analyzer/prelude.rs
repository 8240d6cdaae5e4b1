pub use super::matchers::{AllOf, AnyOf, NoneOf};
use crate::error::DefinitionError;
use crate::sequence::StaticSequence;

pub use super::conformance::{assert_parser, check_conformance};

pub fn any_of<S: StaticSequence>() -> AnyOf<S> {
    AnyOf::new()
}

pub fn none_of<S: StaticSequence>() -> NoneOf<S> {
    NoneOf::new()
}

pub fn all_of<S: StaticSequence>() -> AllOf<S> {
    AllOf::new()
}

pub fn try_any_of<S: StaticSequence>() -> Result<AnyOf<S>, DefinitionError> {
    AnyOf::try_new()
}

pub fn try_none_of<S: StaticSequence>() -> Result<NoneOf<S>, DefinitionError> {
    NoneOf::try_new()
}
