//! Splitter - drives a separator strategy across a buffer
//!
//! Produces the ranges of each segment without touching segment contents.
//! `SplitRanges` is the lazy form and never allocates; `split` and the
//! `split_by_*` helpers collect it into a `Vec<Range>`.
//!
//! Budget rules:
//! - `max_splits == Some(0)` yields nothing at all, not even a trailing range
//! - the trailing segment counts against the budget from the start, so
//!   `Some(1)` returns the whole input unsplit
//! - empty segments dropped by `remove_empty_entries` do not count

use super::error::SplitError;
use super::range::Range;
use super::separator::{AnyOf, Byte, ByteSequence, Element, Predicate, Separator, Subsequence};

/// Split count limit and empty-entry policy for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    /// Maximum number of ranges to return, including the trailing one.
    /// `None` means unbounded.
    pub max_splits: Option<usize>,
    /// Drop zero-length segments from the output
    pub remove_empty_entries: bool,
}

impl SplitOptions {
    /// Unbounded, keeping empty entries
    pub const fn new() -> Self {
        SplitOptions {
            max_splits: None,
            remove_empty_entries: false,
        }
    }

    /// Build options from a signed count, where negative counts are rejected
    pub fn from_signed_count(count: i64) -> Result<Self, SplitError> {
        if count < 0 {
            return Err(SplitError::InvalidArgument { name: "count", value: count });
        }
        let max_splits = usize::try_from(count).unwrap_or(usize::MAX);
        Ok(Self::new().with_max_splits(max_splits))
    }

    /// Limit the number of returned ranges
    pub const fn with_max_splits(mut self, max_splits: usize) -> Self {
        self.max_splits = Some(max_splits);
        self
    }

    /// Set the empty-entry policy
    pub const fn remove_empty_entries(mut self, remove: bool) -> Self {
        self.remove_empty_entries = remove;
        self
    }

    #[inline]
    fn has_budget(&self, emitted: usize) -> bool {
        match self.max_splits {
            Some(max) => emitted < max,
            None => true,
        }
    }
}

/// Lazy iterator over the segment ranges of a buffer
pub struct SplitRanges<'a, T, S> {
    input: &'a [T],
    separator: S,
    options: SplitOptions,
    /// Start of the unconsumed suffix
    index: usize,
    /// Segments emitted so far, plus one reserved for the trailing segment
    emitted: usize,
    finished: bool,
}

impl<'a, T, S: Separator<T>> SplitRanges<'a, T, S> {
    /// Create a new split iterator
    pub fn new(input: &'a [T], separator: S, options: SplitOptions) -> Self {
        SplitRanges {
            input,
            separator,
            options,
            index: 0,
            emitted: 1,
            finished: options.max_splits == Some(0),
        }
    }

    /// Start of the part of the input not yet consumed
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Get remaining input
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        &self.input[self.index..]
    }

    /// Next separator-terminated segment, or `None` once the loop must stop
    fn next_separated(&mut self) -> Option<Range> {
        while self.options.has_budget(self.emitted) {
            let found = self.separator.find(self.remaining())?;
            debug_assert!(found.len > 0, "separator matched zero elements");
            debug_assert!(found.end() <= self.input.len() - self.index, "separator overran input");

            let start = self.index;
            self.index += found.end();

            if found.offset > 0 || !self.options.remove_empty_entries {
                self.emitted += 1;
                return Some(Range::new(start, start + found.offset));
            }
        }
        None
    }
}

impl<T, S: Separator<T>> Iterator for SplitRanges<'_, T, S> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        if self.finished {
            return None;
        }

        if let Some(range) = self.next_separated() {
            return Some(range);
        }

        self.finished = true;
        if self.options.remove_empty_entries && self.index == self.input.len() {
            return None;
        }
        Some(Range::new(self.index, self.input.len()))
    }
}

impl<T, S: Separator<T>> std::iter::FusedIterator for SplitRanges<'_, T, S> {}

/// Lazily split `input` with any separator strategy
#[inline]
pub fn split_iter<T, S: Separator<T>>(
    input: &[T],
    separator: S,
    options: SplitOptions,
) -> SplitRanges<'_, T, S> {
    SplitRanges::new(input, separator, options)
}

/// Split `input` with any separator strategy, collecting the ranges
pub fn split<T, S: Separator<T>>(input: &[T], separator: S, options: SplitOptions) -> Vec<Range> {
    split_iter(input, separator, options).collect()
}

/// Split on a single element value
pub fn split_by_value<T: PartialEq>(input: &[T], value: T, options: SplitOptions) -> Vec<Range> {
    split(input, Element(value), options)
}

/// Split on an exact subsequence
pub fn split_by_subsequence<T: PartialEq>(
    input: &[T],
    subsequence: &[T],
    options: SplitOptions,
) -> Result<Vec<Range>, SplitError> {
    let separator = Subsequence::new(subsequence)?;
    Ok(split(input, separator, options))
}

/// Split on every element the predicate accepts
pub fn split_by_predicate<T, F>(input: &[T], predicate: F, options: SplitOptions) -> Vec<Range>
where
    F: Fn(&T) -> bool,
{
    split(input, Predicate(predicate), options)
}

/// Split text on whichever candidate occurs first.
///
/// Ranges are byte offsets into `text` and always fall on char boundaries,
/// since every candidate is itself text. Order of `candidates` matters when
/// two of them start at the same offset.
pub fn split_by_any_of<C>(
    text: &str,
    candidates: &[C],
    options: SplitOptions,
) -> Result<Vec<Range>, SplitError>
where
    C: AsRef<str> + AsRef<[u8]>,
{
    split_bytes_by_any_of(text.as_bytes(), candidates, options)
}

/// Split bytes on a single byte (SIMD search)
pub fn split_bytes_by_value(input: &[u8], value: u8, options: SplitOptions) -> Vec<Range> {
    split(input, Byte(value), options)
}

/// Split bytes on a byte string (SIMD search)
pub fn split_bytes_by_subsequence(
    input: &[u8],
    subsequence: &[u8],
    options: SplitOptions,
) -> Result<Vec<Range>, SplitError> {
    let separator = ByteSequence::new(subsequence)?;
    Ok(split(input, separator, options))
}

/// Split bytes on whichever candidate byte string occurs first
pub fn split_bytes_by_any_of<C: AsRef<[u8]>>(
    input: &[u8],
    candidates: &[C],
    options: SplitOptions,
) -> Result<Vec<Range>, SplitError> {
    let separator = AnyOf::new(candidates)?;
    Ok(split(input, separator, options))
}
