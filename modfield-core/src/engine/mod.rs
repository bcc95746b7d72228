use std::fmt::Debug;
use std::hash::Hash;

pub mod num_engine;
pub mod tracked;

pub use num_engine::NumEngine;
pub use tracked::TrackedEngine;

/// The arbitrary-precision integer backend.
///
/// Everything above this trait (`BigInt`, `Modulus`, `FieldElement`) is a thin
/// contract-preserving layer; the multi-precision algorithms live behind it and
/// are treated as a trusted service. Engines are stateless, so every operation
/// is an associated function.
pub trait IntegerEngine: 'static + Send + Sync {
    type Int: Clone + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync;

    fn from_i64(v: i64) -> Self::Int;
    /// Parses base-10 text of the form `[+-]?[0-9]+`. Callers validate the
    /// shape beforehand, so `None` only signals an engine-level rejection.
    fn parse_decimal(s: &str) -> Option<Self::Int>;
    fn to_decimal(a: &Self::Int) -> String;
    /// Interprets `bytes` as a big-endian unsigned integer. The empty slice is zero.
    fn from_be_bytes(bytes: &[u8]) -> Self::Int;
    /// Minimal big-endian encoding of `|a|`. Zero encodes as the empty vector.
    fn to_be_bytes(a: &Self::Int) -> Vec<u8>;
    /// Number of significant bits of `|a|`; zero has no bits.
    fn num_bits(a: &Self::Int) -> u64;

    fn byte_len(a: &Self::Int) -> usize {
        Self::num_bits(a).div_ceil(8) as usize
    }

    fn is_zero(a: &Self::Int) -> bool;
    fn is_negative(a: &Self::Int) -> bool;

    fn add(a: &Self::Int, b: &Self::Int) -> Self::Int;
    fn sub(a: &Self::Int, b: &Self::Int) -> Self::Int;
    fn mul(a: &Self::Int, b: &Self::Int) -> Self::Int;
    /// Least non-negative residue of `a` modulo `m`. Requires `m > 0`.
    fn rem_euclid(a: &Self::Int, m: &Self::Int) -> Self::Int;
    /// Inverse of `a` modulo `m` in `[0, m)`, or `None` if `gcd(a, m) != 1`.
    /// Requires `m > 0`; `a` may lie outside `[0, m)`.
    fn mod_inverse(a: &Self::Int, m: &Self::Int) -> Option<Self::Int>;
}

/// The engine backing `BigInt` for the whole crate.
#[cfg(not(feature = "track-ops"))]
pub type DefaultEngine = NumEngine;

/// The engine backing `BigInt` for the whole crate.
#[cfg(feature = "track-ops")]
pub type DefaultEngine = TrackedEngine<NumEngine>;
