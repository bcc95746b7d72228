//! Process-wide tallies of integer-engine calls.
//!
//! Only `TrackedEngine` writes to these; with the `track-ops` feature that is
//! every `BigInt`, `Modulus` and `FieldElement` operation in the process.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Count of integer additions `a + b`.
pub static ADD_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of integer subtractions `a - b`.
pub static SUB_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of full-width multiplications `a * b`.
pub static MULT_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of Euclidean reductions `a mod m`.
pub static REDUCE_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of modular inversions (successful or not).
pub static INVERSE_COUNT: AtomicUsize = AtomicUsize::new(0);

// Conversions
/// Count of `from_i64` conversions.
pub static FROM_I64_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of decimal parses.
pub static FROM_DECIMAL_COUNT: AtomicUsize = AtomicUsize::new(0);
/// Count of big-endian byte decodes.
pub static FROM_BYTES_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Reset addition count.
pub fn reset_add_count() {
    ADD_COUNT.store(0, Ordering::Relaxed);
}

/// Read addition count.
pub fn get_add_count() -> usize {
    ADD_COUNT.load(Ordering::Relaxed)
}

/// Reset subtraction count.
pub fn reset_sub_count() {
    SUB_COUNT.store(0, Ordering::Relaxed);
}

/// Read subtraction count.
pub fn get_sub_count() -> usize {
    SUB_COUNT.load(Ordering::Relaxed)
}

/// Reset multiplication count.
pub fn reset_mult_count() {
    MULT_COUNT.store(0, Ordering::Relaxed);
}

/// Read multiplication count.
pub fn get_mult_count() -> usize {
    MULT_COUNT.load(Ordering::Relaxed)
}

/// Reset reduction count.
pub fn reset_reduce_count() {
    REDUCE_COUNT.store(0, Ordering::Relaxed);
}

/// Read reduction count.
pub fn get_reduce_count() -> usize {
    REDUCE_COUNT.load(Ordering::Relaxed)
}

/// Reset inverse count.
pub fn reset_inverse_count() {
    INVERSE_COUNT.store(0, Ordering::Relaxed);
}

/// Read inverse count.
pub fn get_inverse_count() -> usize {
    INVERSE_COUNT.load(Ordering::Relaxed)
}

/// Reset conversion counts.
pub fn reset_from_counts() {
    FROM_I64_COUNT.store(0, Ordering::Relaxed);
    FROM_DECIMAL_COUNT.store(0, Ordering::Relaxed);
    FROM_BYTES_COUNT.store(0, Ordering::Relaxed);
}

/// Read `from_i64` count.
pub fn get_from_i64_count() -> usize {
    FROM_I64_COUNT.load(Ordering::Relaxed)
}
/// Read decimal parse count.
pub fn get_from_decimal_count() -> usize {
    FROM_DECIMAL_COUNT.load(Ordering::Relaxed)
}
/// Read byte decode count.
pub fn get_from_bytes_count() -> usize {
    FROM_BYTES_COUNT.load(Ordering::Relaxed)
}

/// Snapshot of all operation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldOpCounts {
    pub adds: usize,
    pub subs: usize,
    pub mults: usize,
    pub reductions: usize,
    pub inverses: usize,
    // conversions
    pub from_i64: usize,
    pub from_decimal: usize,
    pub from_bytes: usize,
}

/// Read all counters into a single struct for reporting.
pub fn get_field_op_counts() -> FieldOpCounts {
    FieldOpCounts {
        adds: get_add_count(),
        subs: get_sub_count(),
        mults: get_mult_count(),
        reductions: get_reduce_count(),
        inverses: get_inverse_count(),
        from_i64: get_from_i64_count(),
        from_decimal: get_from_decimal_count(),
        from_bytes: get_from_bytes_count(),
    }
}

/// Reset all operation counters to zero.
pub fn reset_all_field_op_counts() {
    reset_add_count();
    reset_sub_count();
    reset_mult_count();
    reset_reduce_count();
    reset_inverse_count();
    reset_from_counts();
}
