use thiserror::Error;

use crate::bigint::BigInt;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal integer literal: {0:?}")]
pub struct ParseError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(BigInt),
    #[error("no modulus has been installed")]
    UninitializedModulus,
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },
    #[error("snapshot was taken from a different modulus context")]
    InvalidSnapshot,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed field config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Field(#[from] FieldError),
}
