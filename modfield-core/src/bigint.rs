use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::engine::{DefaultEngine, IntegerEngine};
use crate::utils::errors::ParseError;

type Int = <DefaultEngine as IntegerEngine>::Int;

/// Arbitrary-precision signed integer.
///
/// Immutable value type: every operation returns a new instance. Equality is
/// equality of the denoted integers.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(pub(crate) Int);

/// Accepts exactly `[+-]?[0-9]+`.
fn is_decimal_literal(s: &str) -> bool {
    let digits = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl BigInt {
    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    pub fn from_i64(v: i64) -> Self {
        Self(DefaultEngine::from_i64(v))
    }

    /// Parses an optionally signed base-10 literal. Leading zeros are
    /// accepted; whitespace, digit separators and radix prefixes are not.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseError> {
        if !is_decimal_literal(s) {
            return Err(ParseError(s.to_string()));
        }
        DefaultEngine::parse_decimal(s)
            .map(Self)
            .ok_or_else(|| ParseError(s.to_string()))
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(DefaultEngine::from_be_bytes(bytes))
    }

    /// Minimal big-endian encoding of the magnitude; zero is the empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        DefaultEngine::to_be_bytes(&self.0)
    }

    /// Canonical base-10 text: no leading zeros, `-` for negatives.
    pub fn to_decimal_string(&self) -> String {
        DefaultEngine::to_decimal(&self.0)
    }

    /// Number of bytes in the big-endian unsigned encoding of `|self|`.
    pub fn byte_length(&self) -> usize {
        DefaultEngine::byte_len(&self.0)
    }

    pub fn num_bits(&self) -> u64 {
        DefaultEngine::num_bits(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        DefaultEngine::is_zero(&self.0)
    }

    pub fn is_negative(&self) -> bool {
        DefaultEngine::is_negative(&self.0)
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Least non-negative residue modulo `m`. Requires `m > 0`.
    pub(crate) fn rem_euclid(&self, m: &BigInt) -> BigInt {
        Self(DefaultEngine::rem_euclid(&self.0, &m.0))
    }

    /// Inverse modulo `m`, if `self` is a unit. Requires `m > 0`.
    pub(crate) fn mod_inverse(&self, m: &BigInt) -> Option<BigInt> {
        DefaultEngine::mod_inverse(&self.0, &m.0).map(Self)
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_decimal_string())
    }
}

macro_rules! impl_bigint_binop {
    ($trait:ident, $method:ident) => {
        // Borrowed op Borrowed
        impl<'a> $trait<&'a BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &'a BigInt) -> BigInt {
                BigInt(<DefaultEngine as IntegerEngine>::$method(&self.0, &rhs.0))
            }
        }

        // Owned op Owned
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(&self, &rhs)
            }
        }

        // Owned op Borrowed
        impl<'a> $trait<&'a BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &'a BigInt) -> BigInt {
                $trait::$method(&self, rhs)
            }
        }

        // Borrowed op Owned
        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(self, &rhs)
            }
        }
    };
}

impl_bigint_binop!(Add, add);
impl_bigint_binop!(Sub, sub);
impl_bigint_binop!(Mul, mul);

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        &BigInt::zero() - self
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        -&self
    }
}

/// Serialized as its decimal string so that configs stay human-readable.
impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct BigIntVisitor;

impl de::Visitor<'_> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BigInt::from_decimal_str(v).map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from_i64(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from_bytes_be(&v.to_be_bytes()))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
