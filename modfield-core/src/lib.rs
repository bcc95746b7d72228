#![allow(clippy::assertions_on_result_states)]

//! Arbitrary-precision integers and integers modulo a runtime-selected
//! modulus.
//!
//! The modulus lives in a [`ModulusContext`]. The process-wide context
//! returned by [`ModulusContext::global`] backs the ambient API: the free
//! functions in [`modulus`] and every [`FieldElement`] constructor and
//! operation. See [`field`] for what happens when the modulus changes while
//! field elements are alive.

pub mod bigint;
pub mod config;
pub mod engine;
pub mod field;
pub mod modulus;
pub mod utils;

pub use bigint::BigInt;
pub use config::{ensure_default_modulus, FieldConfig, DEFAULT_MODULUS};
pub use field::FieldElement;
pub use modulus::{ContextLock, Modulus, ModulusContext, ModulusGuard, Snapshot};
pub use utils::errors::{ConfigError, FieldError, ParseError};
