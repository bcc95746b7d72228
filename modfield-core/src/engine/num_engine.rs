use num::bigint::{BigInt as NumBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::IntegerEngine;

/// `IntegerEngine` backed by `num-bigint`, with inversion through
/// `num-integer`'s extended Euclidean algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumEngine;

impl IntegerEngine for NumEngine {
    type Int = NumBigInt;

    #[inline]
    fn from_i64(v: i64) -> NumBigInt {
        NumBigInt::from(v)
    }

    fn parse_decimal(s: &str) -> Option<NumBigInt> {
        NumBigInt::parse_bytes(s.as_bytes(), 10)
    }

    fn to_decimal(a: &NumBigInt) -> String {
        a.to_str_radix(10)
    }

    fn from_be_bytes(bytes: &[u8]) -> NumBigInt {
        NumBigInt::from_bytes_be(Sign::Plus, bytes)
    }

    fn to_be_bytes(a: &NumBigInt) -> Vec<u8> {
        if a.is_zero() {
            Vec::new()
        } else {
            a.magnitude().to_bytes_be()
        }
    }

    #[inline]
    fn num_bits(a: &NumBigInt) -> u64 {
        a.bits()
    }

    #[inline]
    fn is_zero(a: &NumBigInt) -> bool {
        Zero::is_zero(a)
    }

    #[inline]
    fn is_negative(a: &NumBigInt) -> bool {
        Signed::is_negative(a)
    }

    #[inline]
    fn add(a: &NumBigInt, b: &NumBigInt) -> NumBigInt {
        a + b
    }

    #[inline]
    fn sub(a: &NumBigInt, b: &NumBigInt) -> NumBigInt {
        a - b
    }

    #[inline]
    fn mul(a: &NumBigInt, b: &NumBigInt) -> NumBigInt {
        a * b
    }

    #[inline]
    fn rem_euclid(a: &NumBigInt, m: &NumBigInt) -> NumBigInt {
        a.mod_floor(m)
    }

    fn mod_inverse(a: &NumBigInt, m: &NumBigInt) -> Option<NumBigInt> {
        let a = a.mod_floor(m);
        let egcd = a.extended_gcd(m);
        if egcd.gcd.is_one() {
            Some(egcd.x.mod_floor(m))
        } else {
            None
        }
    }
}
