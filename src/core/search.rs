//! Forward search primitives
//!
//! Stateless scans over a borrowed slice. Generic element searches are
//! plain loops; byte searches go through memchr for SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)
//!
//! All offsets are relative to the slice passed in.

use memchr::{memchr, memmem};

/// Index of the first element satisfying `pred`
#[inline]
pub fn find_index<T, F>(haystack: &[T], pred: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    haystack.iter().position(pred)
}

/// Index of the last element satisfying `pred`
#[inline]
pub fn find_last_index<T, F>(haystack: &[T], pred: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    haystack.iter().rposition(pred)
}

/// Index of the first element equal to `needle`
#[inline]
pub fn find_element<T: PartialEq>(haystack: &[T], needle: &T) -> Option<usize> {
    haystack.iter().position(|e| e == needle)
}

/// Index of the first occurrence of `needle` in `haystack`.
///
/// Naive window scan, O(n·m). An empty needle matches at 0.
pub fn find_subsequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    let (first, rest) = match needle.split_first() {
        Some(parts) => parts,
        None => return Some(0),
    };
    if needle.len() > haystack.len() {
        return None;
    }

    let last_start = haystack.len() - needle.len();
    let mut pos = 0;
    while pos <= last_start {
        // Jump to the next candidate start before comparing the tail
        let skip = find_element(&haystack[pos..=last_start], first)?;
        pos += skip;
        if haystack[pos + 1..pos + needle.len()] == *rest {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Find next occurrence of a specific byte using SIMD
#[inline]
pub fn find_byte(haystack: &[u8], byte: u8) -> Option<usize> {
    memchr(byte, haystack)
}

/// Find next occurrence of a byte string using SIMD
///
/// One-shot search: no finder is built or cached across calls.
#[inline]
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(haystack, needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_index() {
        let data = [3, 8, 5, 10, 7];
        assert_eq!(find_index(&data, |&n| n > 4), Some(1));
        assert_eq!(find_index(&data, |&n| n > 100), None);
        assert_eq!(find_index(&[] as &[i32], |_| true), None);
    }

    #[test]
    fn test_find_last_index() {
        let data = [3, 8, 5, 10, 7];
        assert_eq!(find_last_index(&data, |&n| n % 2 == 0), Some(3));
        assert_eq!(find_last_index(&data, |&n| n < 4), Some(0));
        assert_eq!(find_last_index(&data, |&n| n > 100), None);
    }

    #[test]
    fn test_find_element() {
        assert_eq!(find_element(&['a', 'b', 'c'], &'c'), Some(2));
        assert_eq!(find_element(&['a', 'b', 'c'], &'z'), None);
    }

    #[test]
    fn test_find_subsequence() {
        let data = [1, 2, 1, 2, 3, 4];
        assert_eq!(find_subsequence(&data, &[1, 2, 3]), Some(2));
        assert_eq!(find_subsequence(&data, &[1, 2]), Some(0));
        assert_eq!(find_subsequence(&data, &[4]), Some(5));
        assert_eq!(find_subsequence(&data, &[3, 4, 5]), None);
        assert_eq!(find_subsequence(&data, &[]), Some(0));
        assert_eq!(find_subsequence(&[1], &[1, 1]), None);
    }

    #[test]
    fn test_find_subsequence_at_end() {
        assert_eq!(find_subsequence(b"xxab", b"ab"), Some(2));
        assert_eq!(find_subsequence(b"xxa", b"ab"), None);
    }

    #[test]
    fn test_find_byte() {
        assert_eq!(find_byte(b"hello <world>", b'<'), Some(6));
        assert_eq!(find_byte(b"hello", b'<'), None);
    }

    #[test]
    fn test_find_bytes_matches_generic() {
        let haystack = b"one\r\ntwo\r\nthree";
        let needles: [&[u8]; 5] = [b"\r\n", b"two", b"e", b"three", b"four"];
        for needle in needles {
            assert_eq!(
                find_bytes(haystack, needle),
                find_subsequence(haystack, needle),
                "needle {:?}",
                needle
            );
        }
    }
}
