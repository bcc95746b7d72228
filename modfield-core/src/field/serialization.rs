//! Wire formats for [`FieldElement`].
//!
//! Both formats carry the minimal big-endian bytes of the representative and
//! nothing else; decoding reduces or validates against whatever modulus is
//! active at that point.

use std::fmt;
use std::io::{Read, Write};

use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::FieldElement;
use crate::bigint::BigInt;
use crate::modulus::active_modulus;

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

struct FieldElementVisitor;

impl<'de> de::Visitor<'de> for FieldElementVisitor {
    type Value = FieldElement;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("big-endian bytes of a field element")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        FieldElement::from_bytes(v).map_err(E::custom)
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_bytes(&v)
    }

    // Self-describing formats without a bytes type (JSON) hand us a sequence.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        self.visit_bytes(&bytes)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(FieldElementVisitor)
    }
}

impl CanonicalSerialize for FieldElement {
    fn serialize_with_mode<W: Write>(
        &self,
        writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.to_bytes().serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.to_bytes().serialized_size(compress)
    }
}

/// Passes only if a modulus is active and the representative lies below it.
impl Valid for FieldElement {
    fn check(&self) -> Result<(), SerializationError> {
        let modulus = active_modulus().map_err(|_| SerializationError::InvalidData)?;
        if modulus.contains(&self.value) {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl CanonicalDeserialize for FieldElement {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let bytes = Vec::<u8>::deserialize_with_mode(reader, compress, validate)?;
        let modulus = active_modulus().map_err(|_| SerializationError::InvalidData)?;
        let value = BigInt::from_bytes_be(&bytes);
        if matches!(validate, Validate::Yes) && !modulus.contains(&value) {
            return Err(SerializationError::InvalidData);
        }
        Ok(Self::from_canonical(modulus.reduce(&value), &modulus))
    }
}
