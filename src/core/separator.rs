//! Separator strategies
//!
//! Each strategy answers one question: where does the next separator start
//! in this suffix, and how long is it. The splitter owns the position; a
//! strategy only ever sees `input[pos..]` and keeps no state between calls.
//!
//! Strategies:
//! - `Element`: a single value, generic over `T: PartialEq`
//! - `Subsequence`: an exact run of values
//! - `Predicate`: the first element a closure accepts
//! - `Byte` / `ByteSequence`: byte fast paths backed by memchr
//! - `AnyOf`: earliest of several byte strings, ties go to the first listed

use super::error::SplitError;
use super::search::{find_bytes, find_byte, find_element, find_index, find_subsequence};

/// A separator occurrence, relative to the start of the scanned suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Offset of the first separator element
    pub offset: usize,
    /// Number of elements the separator consumes (never 0)
    pub len: usize,
}

impl Match {
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Match { offset, len }
    }

    /// Offset one past the separator
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Matching rule used to find the next separator in a buffer suffix
pub trait Separator<T> {
    /// Find the first separator in `haystack`
    fn find(&self, haystack: &[T]) -> Option<Match>;
}

impl<T, S: Separator<T> + ?Sized> Separator<T> for &S {
    #[inline]
    fn find(&self, haystack: &[T]) -> Option<Match> {
        S::find(self, haystack)
    }
}

/// Split on a single element value
#[derive(Debug, Clone, Copy)]
pub struct Element<T>(pub T);

impl<T: PartialEq> Separator<T> for Element<T> {
    #[inline]
    fn find(&self, haystack: &[T]) -> Option<Match> {
        find_element(haystack, &self.0).map(|offset| Match::new(offset, 1))
    }
}

/// Split on an exact, non-empty run of elements
#[derive(Debug, Clone, Copy)]
pub struct Subsequence<'s, T> {
    needle: &'s [T],
}

impl<'s, T> Subsequence<'s, T> {
    pub fn new(needle: &'s [T]) -> Result<Self, SplitError> {
        if needle.is_empty() {
            return Err(SplitError::InvalidSeparator("separator is empty"));
        }
        Ok(Subsequence { needle })
    }

    pub fn needle(&self) -> &'s [T] {
        self.needle
    }
}

impl<T: PartialEq> Separator<T> for Subsequence<'_, T> {
    #[inline]
    fn find(&self, haystack: &[T]) -> Option<Match> {
        find_subsequence(haystack, self.needle).map(|offset| Match::new(offset, self.needle.len()))
    }
}

/// Split on every element accepted by a predicate
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<T, F> Separator<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn find(&self, haystack: &[T]) -> Option<Match> {
        find_index(haystack, &self.0).map(|offset| Match::new(offset, 1))
    }
}

/// Split on a single byte
#[derive(Debug, Clone, Copy)]
pub struct Byte(pub u8);

impl Separator<u8> for Byte {
    #[inline]
    fn find(&self, haystack: &[u8]) -> Option<Match> {
        find_byte(haystack, self.0).map(|offset| Match::new(offset, 1))
    }
}

/// Split on a non-empty byte string
#[derive(Debug, Clone, Copy)]
pub struct ByteSequence<'s> {
    needle: &'s [u8],
}

impl<'s> ByteSequence<'s> {
    pub fn new(needle: &'s [u8]) -> Result<Self, SplitError> {
        if needle.is_empty() {
            return Err(SplitError::InvalidSeparator("separator is empty"));
        }
        Ok(ByteSequence { needle })
    }
}

impl Separator<u8> for ByteSequence<'_> {
    #[inline]
    fn find(&self, haystack: &[u8]) -> Option<Match> {
        // Single bytes skip memmem's setup
        let offset = match self.needle {
            [byte] => find_byte(haystack, *byte),
            needle => find_bytes(haystack, needle),
        }?;
        Some(Match::new(offset, self.needle.len()))
    }
}

/// Split on whichever of several byte strings occurs first.
///
/// Candidates are searched in declaration order. The earliest offset wins;
/// on equal offsets the candidate listed first wins, so `["\r\n", "\r"]`
/// consumes a CRLF pair as one separator while `["\r", "\r\n"]` leaves the
/// `\n` in the next segment. A match at offset 0 ends the search early.
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<'s, C> {
    candidates: &'s [C],
}

impl<'s, C: AsRef<[u8]>> AnyOf<'s, C> {
    pub fn new(candidates: &'s [C]) -> Result<Self, SplitError> {
        if candidates.is_empty() {
            return Err(SplitError::InvalidSeparator("separator set is empty"));
        }
        if candidates.iter().any(|c| c.as_ref().is_empty()) {
            return Err(SplitError::InvalidSeparator("separator set contains an empty separator"));
        }
        Ok(AnyOf { candidates })
    }
}

impl AnyOf<'static, &'static str> {
    /// CRLF, LF and CR, with CRLF ahead of CR so it is consumed as one terminator
    pub const fn line_terminators() -> Self {
        AnyOf {
            candidates: &["\r\n", "\n", "\r"],
        }
    }
}

impl<C: AsRef<[u8]>> Separator<u8> for AnyOf<'_, C> {
    fn find(&self, haystack: &[u8]) -> Option<Match> {
        let mut best: Option<Match> = None;

        for candidate in self.candidates {
            let needle = candidate.as_ref();
            let Some(offset) = find_bytes(haystack, needle) else {
                continue;
            };
            if best.is_none_or(|b| offset < b.offset) {
                best = Some(Match::new(offset, needle.len()));
                if offset == 0 {
                    break;
                }
            }
        }

        best
    }
}
