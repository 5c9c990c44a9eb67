//! RustySplit - Zero-copy splitting of binaries into ranges
//!
//! The splitter reports where each segment starts and ends instead of
//! copying segments out. Callers slice (or make sub-binaries) on demand.
//!
//! Separator kinds:
//! - Byte / byte string (SIMD search via memchr)
//! - Byte class predicate (whitespace, digits, ...)
//! - Any of several byte strings, earliest match wins, ties by list order
//! - Line terminators (CRLF, LF, CR)
//!
//! Batch splitting of many binaries runs on the Rayon pool (split_many).
//!
//! The Rust API lives in `core` (ranges, separators, the split loop) and
//! `strategy` (lines, byte classes, batches); the NIFs are thin wrappers.

use rustler::{Atom, Binary, Env, NifResult, Term};

pub mod core;
pub mod strategy;
mod term;

use crate::core::{
    split_by_predicate, split_bytes_by_any_of, split_bytes_by_subsequence, split_bytes_by_value, Range,
    SplitError, SplitOptions,
};
use term::{batch_to_term, error_to_term, filled_binary, ok_tuple, ranges_to_term, segments_to_term};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "memory_tracking")]
mod tracking {
    use std::alloc::{GlobalAlloc, Layout};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
    pub static PEAK_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
    /// Number of successful allocation calls since load
    pub static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

    pub struct TrackingAllocator;

    #[cfg(feature = "mimalloc")]
    static UNDERLYING: mimalloc::MiMalloc = mimalloc::MiMalloc;

    #[cfg(not(feature = "mimalloc"))]
    static UNDERLYING: std::alloc::System = std::alloc::System;

    unsafe impl GlobalAlloc for TrackingAllocator {
        unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
            let ptr = UNDERLYING.alloc(layout);
            if !ptr.is_null() {
                ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
                let current = ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
                let mut peak = PEAK_ALLOCATED.load(Ordering::Relaxed);
                while current > peak {
                    match PEAK_ALLOCATED.compare_exchange_weak(
                        peak,
                        current,
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    ) {
                        Ok(_) => break,
                        Err(p) => peak = p,
                    }
                }
            }
            ptr
        }

        unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
            ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
            UNDERLYING.dealloc(ptr, layout)
        }
    }
}

#[cfg(feature = "memory_tracking")]
#[global_allocator]
static GLOBAL: tracking::TrackingAllocator = tracking::TrackingAllocator;

#[cfg(all(feature = "mimalloc", not(feature = "memory_tracking")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Memory Tracking NIFs
// ============================================================================

#[cfg(feature = "memory_tracking")]
use std::sync::atomic::Ordering;

#[cfg(feature = "memory_tracking")]
#[rustler::nif]
fn get_rust_memory() -> usize {
    tracking::ALLOCATED.load(Ordering::SeqCst)
}

#[cfg(feature = "memory_tracking")]
#[rustler::nif]
fn get_rust_memory_peak() -> usize {
    tracking::PEAK_ALLOCATED.load(Ordering::SeqCst)
}

#[cfg(feature = "memory_tracking")]
#[rustler::nif]
fn get_rust_allocation_count() -> usize {
    tracking::ALLOCATIONS.load(Ordering::SeqCst)
}

#[cfg(feature = "memory_tracking")]
#[rustler::nif]
fn reset_rust_memory_stats() -> (usize, usize) {
    let current = tracking::ALLOCATED.load(Ordering::SeqCst);
    let peak = tracking::PEAK_ALLOCATED.swap(current, Ordering::SeqCst);
    tracking::ALLOCATIONS.store(0, Ordering::SeqCst);
    (current, peak)
}

#[cfg(not(feature = "memory_tracking"))]
#[rustler::nif]
fn get_rust_memory() -> usize {
    0
}

#[cfg(not(feature = "memory_tracking"))]
#[rustler::nif]
fn get_rust_memory_peak() -> usize {
    0
}

#[cfg(not(feature = "memory_tracking"))]
#[rustler::nif]
fn get_rust_allocation_count() -> usize {
    0
}

#[cfg(not(feature = "memory_tracking"))]
#[rustler::nif]
fn reset_rust_memory_stats() -> (usize, usize) {
    (0, 0)
}

// ============================================================================
// Argument Handling
// ============================================================================

/// Build split options from NIF arguments (`nil` count = unbounded)
fn split_options(count: Option<i64>, remove_empty: bool) -> Result<SplitOptions, SplitError> {
    let options = match count {
        Some(count) => SplitOptions::from_signed_count(count)?,
        None => SplitOptions::new(),
    };
    Ok(options.remove_empty_entries(remove_empty))
}

/// Encode a split result as `{:ok, [{start, len}]}` or `{:error, reason}`
fn ranges_result<'a>(env: Env<'a>, result: Result<Vec<Range>, SplitError>) -> NifResult<Term<'a>> {
    match result {
        Ok(ranges) => Ok(ok_tuple(env, ranges_to_term(env, &ranges))),
        Err(e) => error_to_term(env, &e),
    }
}

// ============================================================================
// Splitting NIFs
// ============================================================================

/// Split on a separator binary
#[rustler::nif]
fn split_to_ranges<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    separator: Binary<'a>,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let result = split_options(count, remove_empty)
        .and_then(|options| split_bytes_by_subsequence(input.as_slice(), separator.as_slice(), options));
    ranges_result(env, result)
}

/// Split on a single byte
#[rustler::nif]
fn split_by_byte<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    byte: u8,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let result = split_options(count, remove_empty)
        .map(|options| split_bytes_by_value(input.as_slice(), byte, options));
    ranges_result(env, result)
}

/// Split on every byte of a named class
/// Classes: :whitespace, :ascii_digit, :ascii_punctuation, :control
#[rustler::nif]
fn split_by_class<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    class: Atom,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let class = class.to_term(env).atom_to_string()?;
    let result = strategy::classes::byte_class(&class).and_then(|predicate| {
        let options = split_options(count, remove_empty)?;
        Ok(split_by_predicate(input.as_slice(), predicate, options))
    });
    ranges_result(env, result)
}

/// Split on whichever candidate occurs first; earlier candidates win ties
#[rustler::nif]
fn split_any_of<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    candidates: Vec<Binary<'a>>,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let candidates: Vec<&[u8]> = candidates.iter().map(|c| c.as_slice()).collect();
    let result = split_options(count, remove_empty)
        .and_then(|options| split_bytes_by_any_of(input.as_slice(), &candidates, options));
    ranges_result(env, result)
}

/// Split on a separator binary, returning sub-binaries instead of ranges
#[rustler::nif]
fn split_segments<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    separator: Binary<'a>,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let result = split_options(count, remove_empty)
        .and_then(|options| split_bytes_by_subsequence(input.as_slice(), separator.as_slice(), options));
    match result {
        Ok(ranges) => Ok(ok_tuple(env, segments_to_term(env, input, &ranges)?)),
        Err(e) => error_to_term(env, &e),
    }
}

/// Split into lines on CRLF, LF or CR
#[rustler::nif]
fn split_lines<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let result = split_options(count, remove_empty)
        .map(|options| strategy::lines::split_lines(input.as_slice(), options));
    ranges_result(env, result)
}

/// Trim ASCII whitespace from both ends of every line
#[rustler::nif]
fn trim_lines<'a>(env: Env<'a>, input: Binary<'a>) -> Term<'a> {
    let input = input.as_slice();
    filled_binary(env, strategy::lines::trimmed_len(input), |output| {
        strategy::lines::trim_lines_into(input, output);
    })
}

// ============================================================================
// Batch Splitting
// ============================================================================

/// Split many binaries on one separator in parallel
#[rustler::nif(schedule = "DirtyCpu")]
fn split_many<'a>(
    env: Env<'a>,
    inputs: Vec<Binary<'a>>,
    separator: Binary<'a>,
    count: Option<i64>,
    remove_empty: bool,
) -> NifResult<Term<'a>> {
    let slices: Vec<&[u8]> = inputs.iter().map(|b| b.as_slice()).collect();
    let result = split_options(count, remove_empty)
        .and_then(|options| strategy::parallel::split_bytes_parallel(&slices, separator.as_slice(), options));

    match result {
        Ok(batch) => {
            debug_batch_report(&batch);
            Ok(ok_tuple(env, batch_to_term(env, &batch)))
        }
        Err(e) => error_to_term(env, &e),
    }
}

/// Batch diagnostics (disabled by default)
/// Enable by setting RUSTYSPLIT_DEBUG=1 environment variable
#[cfg(feature = "memory_tracking")]
fn debug_batch_report(batch: &[Vec<Range>]) {
    if std::env::var("RUSTYSPLIT_DEBUG").is_err() {
        return;
    }
    let total: usize = batch.iter().map(Vec::len).sum();
    let empty = batch.iter().flatten().filter(|r| r.is_empty()).count();
    eprintln!(
        "[SPLIT] batch - inputs:{}, ranges:{}, empty:{}",
        batch.len(),
        total,
        empty
    );
    eprintln!(
        "[SPLIT] memory - live:{}B peak:{}B allocations:{}",
        tracking::ALLOCATED.load(Ordering::Relaxed),
        tracking::PEAK_ALLOCATED.load(Ordering::Relaxed),
        tracking::ALLOCATIONS.load(Ordering::Relaxed)
    );
}

#[cfg(not(feature = "memory_tracking"))]
#[inline]
fn debug_batch_report(_batch: &[Vec<Range>]) {}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.RustySplit.Native");
