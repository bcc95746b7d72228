//! Optional per-element modulus tag.
//!
//! With the `modulus-check` feature every element remembers the modulus it
//! was built under and each operation asserts that it matches the active
//! modulus. Without the feature the tag is zero-sized and every check is a
//! no-op, so release behavior is the plain ambient contract.

use std::sync::Arc;

use crate::modulus::Modulus;

#[cfg(feature = "modulus-check")]
#[derive(Clone, Debug)]
pub(crate) struct ModulusTag(Arc<Modulus>);

#[cfg(not(feature = "modulus-check"))]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ModulusTag;

impl ModulusTag {
    #[cfg(feature = "modulus-check")]
    #[inline]
    pub(crate) fn new(modulus: &Arc<Modulus>) -> Self {
        Self(Arc::clone(modulus))
    }

    #[cfg(not(feature = "modulus-check"))]
    #[inline(always)]
    pub(crate) fn new(_modulus: &Arc<Modulus>) -> Self {
        Self
    }

    /// Panics if the element was built under a modulus other than `active`.
    #[cfg(feature = "modulus-check")]
    #[track_caller]
    pub(crate) fn check(&self, active: &Modulus) {
        assert!(
            *self.0 == *active,
            "field element built under modulus {} used while modulus {} is active",
            self.0,
            active
        );
    }

    #[cfg(not(feature = "modulus-check"))]
    #[inline(always)]
    pub(crate) fn check(&self, _active: &Modulus) {}
}
