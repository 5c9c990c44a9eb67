//! Parallel Batch Splitting
//!
//! Uses Rayon to split many independent buffers with the same separator.
//! Each split is still a pure function of its own input; results keep the
//! order of `inputs`.

use rayon::prelude::*;
use crate::core::{split, ByteSequence, Range, Separator, SplitError, SplitOptions};

/// Split every input with one separator strategy in parallel
pub fn split_parallel<S>(inputs: &[&[u8]], separator: &S, options: SplitOptions) -> Vec<Vec<Range>>
where
    S: Separator<u8> + Sync,
{
    inputs
        .par_iter()
        .map(|&input| split(input, separator, options))
        .collect()
}

/// Split every input on a byte string in parallel
///
/// The separator is validated once, before any input is scanned.
pub fn split_bytes_parallel(
    inputs: &[&[u8]],
    separator: &[u8],
    options: SplitOptions,
) -> Result<Vec<Vec<Range>>, SplitError> {
    let separator = ByteSequence::new(separator)?;
    Ok(split_parallel(inputs, &separator, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{split_bytes_by_subsequence, Predicate};

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: [&[u8]; 5] = [b"a,b,c", b"", b",,", b"no separator", b"x,,y,"];
        let options = SplitOptions::new().remove_empty_entries(true);

        let results = split_bytes_parallel(&inputs, b",", options).unwrap();
        assert_eq!(results.len(), inputs.len());
        for (input, ranges) in inputs.iter().zip(&results) {
            assert_eq!(ranges, &split_bytes_by_subsequence(input, b",", options).unwrap());
        }
    }

    #[test]
    fn test_parallel_with_predicate() {
        let inputs: [&[u8]; 2] = [b"a b", b"c\td e"];
        let whitespace = Predicate(u8::is_ascii_whitespace);
        let results = split_parallel(&inputs, &whitespace, SplitOptions::new());
        assert_eq!(results[0].len(), 2);
        assert_eq!(results[1].len(), 3);
    }

    #[test]
    fn test_parallel_rejects_empty_separator() {
        let inputs: [&[u8]; 1] = [b"abc"];
        assert!(split_bytes_parallel(&inputs, b"", SplitOptions::new()).is_err());
    }
}
