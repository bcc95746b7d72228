//! Facade over [`modfield_core`].

pub use modfield_core::*;
