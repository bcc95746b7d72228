//! The modulus value object and the context that holds the active one.
//!
//! The free functions here operate on [`ModulusContext::global`], the
//! process-wide context every [`FieldElement`](crate::FieldElement)
//! constructor and operation consults implicitly.

use std::fmt;
use std::sync::Arc;

use crate::bigint::BigInt;
use crate::utils::errors::FieldError;

mod context;

pub use context::{ContextLock, ModulusContext, ModulusGuard, Snapshot};

/// A validated positive modulus.
///
/// All reductions go through here. Inputs to the `*_mod` helpers may lie
/// outside `[0, M)`; outputs never do.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Modulus {
    value: BigInt,
    num_bytes: usize,
}

impl Modulus {
    pub fn new(value: BigInt) -> Result<Self, FieldError> {
        if !value.is_positive() {
            return Err(FieldError::InvalidModulus(value));
        }
        let num_bytes = value.byte_length();
        Ok(Self { value, num_bytes })
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Bytes needed to encode any residue; used to size random sampling.
    #[inline]
    pub fn num_bytes(&self) -> usize {
        self.num_bytes
    }

    #[inline]
    pub fn num_bits(&self) -> u64 {
        self.value.num_bits()
    }

    /// Whether `a` is already a canonical representative in `[0, M)`.
    pub fn contains(&self, a: &BigInt) -> bool {
        !a.is_negative() && a < &self.value
    }

    pub fn reduce(&self, a: &BigInt) -> BigInt {
        a.rem_euclid(&self.value)
    }

    pub fn add_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a + b))
    }

    pub fn sub_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a - b))
    }

    pub fn mul_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a * b))
    }

    pub fn neg_mod(&self, a: &BigInt) -> BigInt {
        self.reduce(&-a)
    }

    /// `None` when `a` shares a nontrivial factor with the modulus.
    pub fn inv_mod(&self, a: &BigInt) -> Option<BigInt> {
        a.mod_inverse(&self.value)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", self.value)
    }
}

/// Installs `modulus` as the process-wide active modulus.
pub fn install(modulus: BigInt) -> Result<(), FieldError> {
    ModulusContext::global().install(modulus)
}

/// Captures the process-wide active modulus.
pub fn save() -> Result<Snapshot, FieldError> {
    ModulusContext::global().save()
}

/// Reinstalls a modulus captured by [`save`].
pub fn restore(snapshot: &Snapshot) -> Result<(), FieldError> {
    ModulusContext::global().restore(snapshot)
}

/// The process-wide active modulus.
pub fn current() -> Result<BigInt, FieldError> {
    ModulusContext::global().current()
}

/// Decimal text of the process-wide active modulus.
pub fn modulus_string() -> Result<String, FieldError> {
    ModulusContext::global().modulus_string()
}

/// Switches the process-wide modulus until the returned guard drops.
pub fn with_modulus(modulus: BigInt) -> Result<ModulusGuard<'static>, FieldError> {
    ModulusContext::global().with_modulus(modulus)
}

pub(crate) fn active_modulus() -> Result<Arc<Modulus>, FieldError> {
    ModulusContext::global().active()
}
