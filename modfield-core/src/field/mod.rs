//! Integers modulo the ambient modulus.
//!
//! Every constructor and operation on [`FieldElement`] reads the modulus that
//! is active in [`ModulusContext::global`](crate::ModulusContext::global) *at
//! call time*. Elements do not remember the modulus they were built under.
//!
//! # Cross-modulus hazard
//!
//! Combining elements built under different moduli is **not** an error. The
//! stored representatives are combined and reduced modulo whatever modulus is
//! active when the operation runs (with the `modulus-check` feature the same
//! code panics instead):
//!
#![cfg_attr(not(feature = "modulus-check"), doc = "```")]
#![cfg_attr(feature = "modulus-check", doc = "```should_panic")]
//! use modfield_core::{modulus, BigInt, FieldElement};
//!
//! modulus::install(BigInt::from_i64(7)).unwrap();
//! let a = FieldElement::from_i64(6).unwrap();
//!
//! modulus::install(BigInt::from_i64(11)).unwrap();
//! let one = FieldElement::from_i64(1).unwrap();
//!
//! // 6 + 1 reduced mod 11, not mod 7.
//! assert_eq!(a.try_add(&one).unwrap().to_decimal_string(), "7");
//! ```
//!
//! Equality is likewise a plain comparison of representatives. Keeping
//! operands on one modulus is the caller's job; the `modulus-check` cargo
//! feature turns every mismatch into a panic for debugging.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use rand_core::RngCore;

use crate::bigint::BigInt;
use crate::modulus::{active_modulus, Modulus};
use crate::utils::errors::FieldError;

mod ops;
mod serialization;
mod tag;

#[cfg(test)]
mod tests;

use tag::ModulusTag;

/// A residue in `[0, M)` for the modulus `M` active when it was built.
#[derive(Clone)]
pub struct FieldElement {
    value: BigInt,
    tag: ModulusTag,
}

impl FieldElement {
    /// `value` must already lie in `[0, M)` for `modulus`.
    fn from_canonical(value: BigInt, modulus: &Arc<Modulus>) -> Self {
        debug_assert!(modulus.contains(&value));
        Self {
            value,
            tag: ModulusTag::new(modulus),
        }
    }

    pub fn zero() -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        Ok(Self::from_canonical(BigInt::zero(), &modulus))
    }

    /// The multiplicative identity; equal to zero under the modulus 1.
    pub fn one() -> Result<Self, FieldError> {
        Self::from_i64(1)
    }

    pub fn from_bigint(v: &BigInt) -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        Ok(Self::from_canonical(modulus.reduce(v), &modulus))
    }

    pub fn from_i64(v: i64) -> Result<Self, FieldError> {
        Self::from_bigint(&BigInt::from_i64(v))
    }

    pub fn from_decimal_str(s: &str) -> Result<Self, FieldError> {
        let v = BigInt::from_decimal_str(s)?;
        Self::from_bigint(&v)
    }

    /// Reads `buf` as a big-endian unsigned integer and reduces it.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, FieldError> {
        Self::from_bigint(&BigInt::from_bytes_be(buf))
    }

    /// Uniformly random element: draws `byte_length(M)` bytes, masks the top
    /// byte down to the bit length of `M` and retries until below `M`.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        let mut buf = vec![0u8; modulus.num_bytes()];
        let excess_bits = buf.len() * 8 - modulus.num_bits() as usize;
        let mask = 0xffu8 >> excess_bits;
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= mask;
            let candidate = BigInt::from_bytes_be(&buf);
            if modulus.contains(&candidate) {
                return Ok(Self::from_canonical(candidate, &modulus));
            }
        }
    }

    /// Minimal big-endian encoding of the representative. Zero encodes as
    /// the empty buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    pub fn to_decimal_string(&self) -> String {
        self.value.to_decimal_string()
    }

    /// The stored representative.
    pub fn representative(&self) -> &BigInt {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn unary(&self, op: impl FnOnce(&Modulus, &BigInt) -> BigInt) -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        self.tag.check(&modulus);
        Ok(Self::from_canonical(op(&modulus, &self.value), &modulus))
    }

    fn binary(
        &self,
        rhs: &Self,
        op: impl FnOnce(&Modulus, &BigInt, &BigInt) -> BigInt,
    ) -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        self.tag.check(&modulus);
        rhs.tag.check(&modulus);
        Ok(Self::from_canonical(
            op(&modulus, &self.value, &rhs.value),
            &modulus,
        ))
    }

    pub fn negate(&self) -> Result<Self, FieldError> {
        self.unary(Modulus::neg_mod)
    }

    pub fn square(&self) -> Result<Self, FieldError> {
        self.unary(|m, a| m.mul_mod(a, a))
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.binary(rhs, Modulus::add_mod)
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.binary(rhs, Modulus::sub_mod)
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.binary(rhs, Modulus::mul_mod)
    }

    /// Fails with [`FieldError::NotInvertible`] unless the element is a unit
    /// modulo the active modulus.
    pub fn invert(&self) -> Result<Self, FieldError> {
        let modulus = active_modulus()?;
        self.tag.check(&modulus);
        match modulus.inv_mod(&self.value) {
            Some(inverse) => Ok(Self::from_canonical(inverse, &modulus)),
            None => Err(FieldError::NotInvertible {
                value: self.value.clone(),
                modulus: modulus.value().clone(),
            }),
        }
    }

    pub fn try_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.try_mul(&rhs.invert()?)
    }
}

/// Compares representatives only; see the module docs.
impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<i64> for FieldElement {
    type Error = FieldError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        Self::from_i64(v)
    }
}

impl FromStr for FieldElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}
