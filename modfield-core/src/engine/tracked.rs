use std::marker::PhantomData;
use std::sync::atomic::Ordering;

use crate::utils::counters::{
    ADD_COUNT, FROM_BYTES_COUNT, FROM_DECIMAL_COUNT, FROM_I64_COUNT, INVERSE_COUNT, MULT_COUNT,
    REDUCE_COUNT, SUB_COUNT,
};

use super::IntegerEngine;

/// Wraps an engine and counts every arithmetic call in `utils::counters`.
///
/// Formatting, byte encoding and sign queries are not counted.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackedEngine<E>(PhantomData<E>);

impl<E: IntegerEngine> IntegerEngine for TrackedEngine<E> {
    type Int = E::Int;

    fn from_i64(v: i64) -> Self::Int {
        FROM_I64_COUNT.fetch_add(1, Ordering::Relaxed);
        E::from_i64(v)
    }

    fn parse_decimal(s: &str) -> Option<Self::Int> {
        FROM_DECIMAL_COUNT.fetch_add(1, Ordering::Relaxed);
        E::parse_decimal(s)
    }

    fn to_decimal(a: &Self::Int) -> String {
        E::to_decimal(a)
    }

    fn from_be_bytes(bytes: &[u8]) -> Self::Int {
        FROM_BYTES_COUNT.fetch_add(1, Ordering::Relaxed);
        E::from_be_bytes(bytes)
    }

    fn to_be_bytes(a: &Self::Int) -> Vec<u8> {
        E::to_be_bytes(a)
    }

    fn num_bits(a: &Self::Int) -> u64 {
        E::num_bits(a)
    }

    fn is_zero(a: &Self::Int) -> bool {
        E::is_zero(a)
    }

    fn is_negative(a: &Self::Int) -> bool {
        E::is_negative(a)
    }

    fn add(a: &Self::Int, b: &Self::Int) -> Self::Int {
        ADD_COUNT.fetch_add(1, Ordering::Relaxed);
        E::add(a, b)
    }

    fn sub(a: &Self::Int, b: &Self::Int) -> Self::Int {
        SUB_COUNT.fetch_add(1, Ordering::Relaxed);
        E::sub(a, b)
    }

    fn mul(a: &Self::Int, b: &Self::Int) -> Self::Int {
        MULT_COUNT.fetch_add(1, Ordering::Relaxed);
        E::mul(a, b)
    }

    fn rem_euclid(a: &Self::Int, m: &Self::Int) -> Self::Int {
        REDUCE_COUNT.fetch_add(1, Ordering::Relaxed);
        E::rem_euclid(a, m)
    }

    fn mod_inverse(a: &Self::Int, m: &Self::Int) -> Option<Self::Int> {
        INVERSE_COUNT.fetch_add(1, Ordering::Relaxed);
        E::mod_inverse(a, m)
    }
}
