//! Range - half-open interval into the original input
//!
//! Zero-copy reference to one segment of a split buffer.
//! Callers slice the input with it only when they need the contents.

use super::search::{find_index, find_last_index};

/// A segment of the input, `[start, end)`.
///
/// Always satisfies `start <= end <= input.len()` for the input it was
/// produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Index of the first element of the segment
    pub start: usize,
    /// Index one past the last element of the segment
    pub end: usize,
}

impl Range {
    /// Create a new range
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of elements covered
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this range covers nothing
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the segment from input
    ///
    /// Returns an empty slice if the range does not fit the input.
    #[inline]
    pub fn slice<'a, T>(&self, input: &'a [T]) -> &'a [T] {
        input.get(self.start..self.end).unwrap_or(&[])
    }

    /// Extract the segment from a string
    ///
    /// `None` if the range does not fall on char boundaries of `input`.
    #[inline]
    pub fn as_str<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start..self.end)
    }

    /// Shrink the range from both ends while `pred` holds.
    ///
    /// A range made only of matching elements collapses to an empty range
    /// at its start.
    pub fn trim_matches<T, F>(&self, input: &[T], pred: F) -> Range
    where
        F: Fn(&T) -> bool,
    {
        let segment = self.slice(input);
        match find_index(segment, |e| !pred(e)) {
            Some(first) => {
                // A non-matching element exists, so the reverse scan finds one too
                let last = find_last_index(segment, |e| !pred(e)).unwrap_or(first);
                Range::new(self.start + first, self.start + last + 1)
            }
            None => Range::new(self.start, self.start),
        }
    }
}

impl From<Range> for std::ops::Range<usize> {
    #[inline]
    fn from(range: Range) -> Self {
        range.start..range.end
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(range: std::ops::Range<usize>) -> Self {
        Range::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basic() {
        let range = Range::new(5, 15);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 15);
        assert_eq!(range.len(), 10);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_empty() {
        let range = Range::new(3, 3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(Range::default(), Range::new(0, 0));
    }

    #[test]
    fn test_range_slice() {
        let input = b"hello world";
        assert_eq!(Range::new(6, 11).slice(input), b"world");
        assert_eq!(Range::new(6, 6).slice(input), b"");
    }

    #[test]
    fn test_range_slice_out_of_bounds() {
        let input = [1, 2, 3];
        assert_eq!(Range::new(2, 9).slice(&input), &[] as &[i32]);
    }

    #[test]
    fn test_range_as_str() {
        let input = "hello wörld";
        assert_eq!(Range::new(0, 5).as_str(input), Some("hello"));
        // 'ö' is two bytes; 8 is inside it
        assert_eq!(Range::new(6, 8).as_str(input), None);
    }

    #[test]
    fn test_range_std_conversion() {
        let input = "abcdef";
        let range = Range::new(1, 4);
        let std_range: std::ops::Range<usize> = range.into();
        assert_eq!(&input[std_range], "bcd");
        assert_eq!(Range::from(2..5), Range::new(2, 5));
    }

    #[test]
    fn test_trim_matches() {
        let input = b"  \tabc d \t";
        let trimmed = Range::new(0, input.len()).trim_matches(input, u8::is_ascii_whitespace);
        assert_eq!(trimmed, Range::new(3, 8));
        assert_eq!(trimmed.slice(input), b"abc d");
    }

    #[test]
    fn test_trim_matches_all_matching() {
        let input = b"xx   yy";
        let trimmed = Range::new(2, 5).trim_matches(input, u8::is_ascii_whitespace);
        assert_eq!(trimmed, Range::new(2, 2));
    }

    #[test]
    fn test_trim_matches_nothing_to_trim() {
        let input = [1, 2, 3, 4];
        let trimmed = Range::new(1, 3).trim_matches(&input, |&n| n == 0);
        assert_eq!(trimmed, Range::new(1, 3));
    }
}
