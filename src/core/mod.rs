//! Core splitting primitives
//!
//! This module contains the fundamental building blocks for splitting:
//! - Range: zero-copy `[start, end)` reference into the input
//! - Search: forward scans (generic loops, memchr/memmem for bytes)
//! - Separator: one matching strategy per separator kind
//! - Splitter: the split loop with count limit and empty-entry policy
//! - Error: construction-time failures

pub mod error;
pub mod range;
pub mod search;
pub mod separator;
pub mod splitter;

pub use error::SplitError;
pub use range::Range;
pub use separator::{AnyOf, Byte, ByteSequence, Element, Match, Predicate, Separator, Subsequence};
pub use splitter::{
    split, split_by_any_of, split_by_predicate, split_by_subsequence, split_by_value,
    split_bytes_by_any_of, split_bytes_by_subsequence, split_bytes_by_value, split_iter,
    SplitOptions, SplitRanges,
};

#[cfg(test)]
mod tests {
    use crate::core::{
        split_by_any_of, split_by_subsequence, split_by_value, split_iter, Element, Range, SplitOptions,
    };

    #[test]
    fn test_generic_api_is_reachable_from_the_crate_root() {
        let words = ["a", "-", "b", "-", "-", "c"];
        let ranges = split_by_value(&words[..], "-", SplitOptions::new());
        assert_eq!(ranges, vec![Range::new(0, 1), Range::new(2, 3), Range::new(4, 4), Range::new(5, 6)]);

        let ranges = split_by_subsequence(&[1u16, 0, 0, 2][..], &[0, 0], SplitOptions::new()).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 1), Range::new(3, 4)]);

        let ranges = split_by_any_of("a, b;c", &[", ", ";"], SplitOptions::new()).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 1), Range::new(3, 4), Range::new(5, 6)]);

        let lazy: Vec<Range> = split_iter(&[3, 1, 3][..], Element(1), SplitOptions::new()).collect();
        assert_eq!(lazy, vec![Range::new(0, 1), Range::new(2, 3)]);
    }
}
