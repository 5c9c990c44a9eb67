//! Elixir Term Conversion Utilities
//!
//! Converts split results to Elixir terms.
//! Ranges become `{start, length}` tuples, the shape `:binary.part/3` takes.

use rustler::types::atom::Atom;
use rustler::{Binary, Encoder, Env, NewBinary, NifResult, Term};
use crate::core::{Range, SplitError};

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
}

/// Wrap a term as `{:ok, term}`
#[inline]
pub fn ok_tuple<'a>(env: Env<'a>, term: Term<'a>) -> Term<'a> {
    (ok(), term).encode(env)
}

/// Convert a split error to `{:error, {kind, message}}`
pub fn error_to_term<'a>(env: Env<'a>, err: &SplitError) -> NifResult<Term<'a>> {
    let kind = Atom::from_str(env, err.kind())?;
    Ok((error(), (kind, err.to_string())).encode(env))
}

/// Convert ranges to a list of `{start, length}` tuples
pub fn ranges_to_term<'a>(env: Env<'a>, ranges: &[Range]) -> Term<'a> {
    // Build in reverse so each prepend is O(1)
    let mut list = Term::list_new_empty(env);
    for range in ranges.iter().rev() {
        list = list.list_prepend((range.start, range.len()).encode(env));
    }
    list
}

/// Convert ranges to a list of sub-binaries of `input`
///
/// Zero-copy: every segment shares memory with the original binary.
pub fn segments_to_term<'a>(env: Env<'a>, input: Binary<'a>, ranges: &[Range]) -> NifResult<Term<'a>> {
    let mut list = Term::list_new_empty(env);
    for range in ranges.iter().rev() {
        let segment = input.make_subbinary(range.start, range.len())?;
        list = list.list_prepend(segment.encode(env));
    }
    Ok(list)
}

/// Convert a batch of range lists to a list of lists
pub fn batch_to_term<'a>(env: Env<'a>, batch: &[Vec<Range>]) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for ranges in batch.iter().rev() {
        list = list.list_prepend(ranges_to_term(env, ranges));
    }
    list
}

/// Allocate a binary of exactly `len` bytes and let `fill` write it in place
#[inline]
pub fn filled_binary<'a>(env: Env<'a>, len: usize, fill: impl FnOnce(&mut [u8])) -> Term<'a> {
    let mut binary = NewBinary::new(env, len);
    fill(binary.as_mut_slice());
    binary.into()
}
