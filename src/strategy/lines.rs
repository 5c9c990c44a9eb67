//! Line splitting and per-line trimming
//!
//! Built on the range splitter so no intermediate line strings are made.
//! Trimming runs in two passes over the line ranges: `trimmed_len` sizes the
//! output, then `trim_lines_into` copies each trimmed line into a buffer of
//! exactly that size. The NIF hands that buffer out as the result binary.

use crate::core::{split, split_iter, AnyOf, Byte, Range, SplitOptions};

/// Ranges of each line, accepting `\r\n`, `\n` and `\r` terminators.
///
/// Terminators are excluded from the ranges.
pub fn split_lines(input: &[u8], options: SplitOptions) -> Vec<Range> {
    split(input, AnyOf::line_terminators(), options)
}

fn trimmed_line_ranges(input: &[u8]) -> impl Iterator<Item = Range> + '_ {
    split_iter(input, Byte(b'\n'), SplitOptions::new())
        .map(move |line| line.trim_matches(input, u8::is_ascii_whitespace))
}

/// Length of `trim_lines(input)` without building it
pub fn trimmed_len(input: &[u8]) -> usize {
    let mut lines: usize = 0;
    let content: usize = trimmed_line_ranges(input)
        .inspect(|_| lines += 1)
        .map(|r| r.len())
        .sum();
    // One `\n` between each pair of lines
    content + lines.saturating_sub(1)
}

/// Write the trimmed lines of `input` into `output`, returning the bytes
/// written.
///
/// `output` must be at least `trimmed_len(input)` bytes long.
pub fn trim_lines_into(input: &[u8], output: &mut [u8]) -> usize {
    let mut cursor = 0;
    for (i, line) in trimmed_line_ranges(input).enumerate() {
        if i > 0 {
            output[cursor] = b'\n';
            cursor += 1;
        }
        let bytes = line.slice(input);
        output[cursor..cursor + bytes.len()].copy_from_slice(bytes);
        cursor += bytes.len();
    }
    cursor
}

/// Trim leading and trailing ASCII whitespace from every `\n`-separated
/// line, keeping the line structure.
///
/// A `\r` before `\n` counts as trailing whitespace and is dropped.
pub fn trim_lines(input: &[u8]) -> Vec<u8> {
    let mut output = vec![0; trimmed_len(input)];
    let written = trim_lines_into(input, &mut output);
    debug_assert_eq!(written, output.len());
    output
}
