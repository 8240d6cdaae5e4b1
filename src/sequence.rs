//! # Fixed Character Sequences
//!
//! This module defines the immutable character buffers that every matcher is
//! defined over, together with the sorted-set invariant required by set-based
//! matchers.
//!
//! ## Components
//!
//! * [`FixedCharSequence`]: a `Copy` buffer of exactly `N` characters, constructible
//!   in const context from a literal
//! * [`StaticSequence`]: a zero-sized marker type binding a literal at compile time,
//!   declared with [`static_sequence!`](crate::static_sequence)
//! * [`CharView`]: the length-erased queries shared by both
//! * [`is_sorted_and_uniqued`]: the strictly-increasing check gating `AnyOf`/`NoneOf`
//!
//! All queries are `const fn`, so they evaluate identically at compile time and
//! at runtime.

use std::fmt;

use crate::error::SequenceError;

/// Immutable sequence of exactly `N` characters.
///
/// The length is part of the type and never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedCharSequence<const N: usize> {
    chars: [char; N],
}

impl<const N: usize> FixedCharSequence<N> {
    /// Creates a sequence from a literal of exactly `N` characters.
    ///
    /// # Panics
    ///
    /// Panics if the literal does not contain exactly `N` characters. In a const
    /// context this is a compile error.
    pub const fn new(literal: &str) -> Self {
        if char_count(literal) != N {
            panic!("literal length does not match the sequence size");
        }
        let bytes = literal.as_bytes();
        let mut chars = ['\0'; N];
        let mut offset = 0;
        let mut index = 0;
        while index < N {
            let (c, width) = decode_at(bytes, offset);
            chars[index] = c;
            offset += width;
            index += 1;
        }
        Self { chars }
    }

    /// Fallible counterpart of [`FixedCharSequence::new`].
    pub fn try_new(literal: &str) -> Result<Self, SequenceError> {
        let found = literal.chars().count();
        if found != N {
            return Err(SequenceError::LengthMismatch {
                expected: N,
                found,
            });
        }
        Ok(Self::new(literal))
    }

    pub const fn from_chars(chars: [char; N]) -> Self {
        Self { chars }
    }

    /// Read-only window over the stored characters.
    pub const fn view(&self) -> &[char] {
        &self.chars
    }

    pub const fn as_view(&self) -> CharView<'_> {
        CharView::new(&self.chars)
    }

    pub const fn contains(&self, c: char) -> bool {
        self.as_view().contains(c)
    }

    pub const fn size(&self) -> usize {
        N
    }

    /// Returns true if `other` is a prefix of this sequence.
    ///
    /// A longer `other` is never a prefix; that case answers `false`.
    pub const fn starts_with<const M: usize>(&self, other: &FixedCharSequence<M>) -> bool {
        other.as_view().is_prefix_of(&self.chars)
    }

    pub const fn is_sorted_set(&self) -> bool {
        self.as_view().is_sorted_set()
    }

    pub const fn into_chars(self) -> [char; N] {
        self.chars
    }
}

impl FixedCharSequence<1> {
    pub const fn from_char(c: char) -> Self {
        Self { chars: [c] }
    }
}

impl<const N: usize> From<[char; N]> for FixedCharSequence<N> {
    fn from(chars: [char; N]) -> Self {
        Self::from_chars(chars)
    }
}

impl From<char> for FixedCharSequence<1> {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl<const N: usize> TryFrom<&str> for FixedCharSequence<N> {
    type Error = SequenceError;

    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        Self::try_new(literal)
    }
}

impl<const N: usize> fmt::Display for FixedCharSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// A character sequence bound to a type at compile time.
///
/// Implementors are zero-sized markers, which keeps every matcher generic over
/// them zero-sized as well. Use [`static_sequence!`](crate::static_sequence)
/// rather than implementing this by hand, so that `TEXT` and `CHARS` agree.
pub trait StaticSequence: 'static {
    /// The literal as written.
    const TEXT: &'static str;
    /// The literal decoded into characters.
    const CHARS: &'static [char];
    /// The sequence queries matchers evaluate against.
    const SEQUENCE: CharView<'static> = CharView::new(Self::CHARS);
}

/// Borrowed, length-erased view of a character sequence.
///
/// Both [`FixedCharSequence`] and every [`StaticSequence`] answer their
/// queries through this type, so a matcher over a marker behaves exactly like
/// the equivalent `FixedCharSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharView<'a> {
    chars: &'a [char],
}

impl<'a> CharView<'a> {
    pub const fn new(chars: &'a [char]) -> Self {
        Self { chars }
    }

    pub const fn as_slice(&self) -> &'a [char] {
        self.chars
    }

    pub const fn size(&self) -> usize {
        self.chars.len()
    }

    pub const fn contains(&self, c: char) -> bool {
        let mut i = 0;
        while i < self.chars.len() {
            if self.chars[i] == c {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true if this sequence is a prefix of `input`.
    pub const fn is_prefix_of(&self, input: &[char]) -> bool {
        if self.chars.len() > input.len() {
            return false;
        }
        let mut i = 0;
        while i < self.chars.len() {
            if input[i] != self.chars[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_sorted_set(&self) -> bool {
        is_sorted_and_uniqued(self.chars)
    }
}

/// Declares a zero-sized [`StaticSequence`] marker type.
///
/// ```
/// use tokn::sequence::StaticSequence;
/// use tokn::static_sequence;
///
/// static_sequence!(pub Digits = "0123456789");
///
/// assert_eq!(Digits::TEXT, "0123456789");
/// assert_eq!(Digits::CHARS.len(), 10);
/// ```
#[macro_export]
macro_rules! static_sequence {
    ($(#[$meta:meta])* $vis:vis $name:ident = $literal:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::sequence::StaticSequence for $name {
            const TEXT: &'static str = $literal;
            const CHARS: &'static [char] = &$crate::sequence::FixedCharSequence::<
                { $crate::sequence::char_count($literal) },
            >::new($literal)
            .into_chars();
        }
    };
}

/// Returns true iff every character strictly exceeds its predecessor.
///
/// Rejects unsorted order and duplicates in one pass. Sequences of length 0
/// or 1 are trivially sorted.
pub const fn is_sorted_and_uniqued(chars: &[char]) -> bool {
    if chars.len() <= 1 {
        return true;
    }
    let mut i = 0;
    while i + 1 < chars.len() {
        if chars[i + 1] <= chars[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Number of characters in a UTF-8 string, usable in const context.
pub const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // continuation bytes are 0b10xx_xxxx
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

// `bytes` comes from a `&str`, so it is valid UTF-8 and `offset` is always a
// character boundary.
const fn decode_at(bytes: &[u8], offset: usize) -> (char, usize) {
    let lead = bytes[offset] as u32;
    let (code, width) = if lead < 0x80 {
        (lead, 1)
    } else if lead < 0xE0 {
        (((lead & 0x1F) << 6) | continuation(bytes, offset + 1, 0), 2)
    } else if lead < 0xF0 {
        (
            ((lead & 0x0F) << 12)
                | continuation(bytes, offset + 1, 6)
                | continuation(bytes, offset + 2, 0),
            3,
        )
    } else {
        (
            ((lead & 0x07) << 18)
                | continuation(bytes, offset + 1, 12)
                | continuation(bytes, offset + 2, 6)
                | continuation(bytes, offset + 3, 0),
            4,
        )
    };
    match char::from_u32(code) {
        Some(c) => (c, width),
        None => panic!("invalid UTF-8 in sequence literal"),
    }
}

const fn continuation(bytes: &[u8], index: usize, shift: u32) -> u32 {
    ((bytes[index] as u32) & 0x3F) << shift
}
