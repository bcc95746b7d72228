use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::bigint::BigInt;
use crate::modulus::{self, Modulus, Snapshot};
use crate::utils::errors::{ConfigError, FieldError};

/// The 128-bit prime `2^128 - 159`, used when no modulus is configured.
pub const DEFAULT_MODULUS: &str = "340282366920938463463374607431768211297";

static DEFAULT_SNAPSHOT: OnceCell<Snapshot> = OnceCell::new();

/// Which modulus to install into the global context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Decimal string in JSON (a plain integer is accepted as well).
    pub modulus: BigInt,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            modulus: BigInt::from_decimal_str(DEFAULT_MODULUS)
                .expect("DEFAULT_MODULUS is a valid decimal literal"),
        }
    }
}

impl FieldConfig {
    pub fn new(modulus: BigInt) -> Self {
        Self { modulus }
    }

    /// Parses and validates a config such as `{"modulus": "97"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        Modulus::new(self.modulus.clone()).map(|_| ())
    }

    pub fn install(&self) -> Result<(), FieldError> {
        modulus::install(self.modulus.clone())
    }
}

/// Makes [`DEFAULT_MODULUS`] the active global modulus.
///
/// The first call installs it and keeps a snapshot; every later call
/// restores that snapshot, undoing whatever was installed in between.
pub fn ensure_default_modulus() -> Result<(), FieldError> {
    let snapshot = DEFAULT_SNAPSHOT.get_or_try_init(|| {
        FieldConfig::default().install()?;
        modulus::save()
    })?;
    modulus::restore(snapshot)
}
