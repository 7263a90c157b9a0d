//! Identifier codec.
//!
//! The store keeps identifiers in BINARY(16) columns while everything
//! human-facing (API payloads, log lines) uses the canonical hyphenated text
//! form. [`BinaryUuid`] is the storage form; conversions in both directions
//! live here and nowhere else.

use uuid::Uuid;

use crate::error::EngineError;

/// Generate a fresh version-4 identifier. Its `to_string()` is the canonical
/// textual form handed back to callers.
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// A 16-byte identifier as stored in the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BinaryUuid([u8; 16]);

impl BinaryUuid {
    /// Parse the canonical textual form into the storage form.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let uuid = Uuid::try_parse(text)
            .map_err(|_| EngineError::MalformedIdentifier(text.to_string()))?;
        Ok(Self(uuid.into_bytes()))
    }

    /// Identity pass-through for values that are already binary.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The canonical hyphenated lowercase text form.
    pub fn to_canonical(&self) -> String {
        Uuid::from_bytes(self.0).to_string()
    }
}

impl From<Uuid> for BinaryUuid {
    fn from(value: Uuid) -> Self {
        Self(value.into_bytes())
    }
}

impl From<BinaryUuid> for Uuid {
    fn from(value: BinaryUuid) -> Self {
        Uuid::from_bytes(value.0)
    }
}

impl From<BinaryUuid> for sea_orm::Value {
    fn from(value: BinaryUuid) -> Self {
        sea_orm::Value::Bytes(Some(Box::new(value.0.to_vec())))
    }
}

/// Decode a raw column value read back from the store.
impl TryFrom<Vec<u8>> for BinaryUuid {
    type Error = EngineError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value.try_into().map_err(|raw: Vec<u8>| {
            EngineError::MalformedIdentifier(format!("{} bytes, expected 16", raw.len()))
        })?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_generated_identifiers() {
        let id = generate();
        let binary = BinaryUuid::from(id);
        assert_eq!(BinaryUuid::parse(&binary.to_canonical()).unwrap(), binary);
        assert_eq!(binary.to_canonical(), id.to_string());
    }

    #[test]
    fn parse_rejects_malformed_text() {
        let err = BinaryUuid::parse("VITAMINE-B").unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedIdentifier("VITAMINE-B".to_string())
        );
    }

    #[test]
    fn binary_input_passes_through() {
        let id = generate();
        let binary = BinaryUuid::from_bytes(*id.as_bytes());
        assert_eq!(binary.as_bytes(), id.as_bytes());
        assert_eq!(BinaryUuid::try_from(id.as_bytes().to_vec()).unwrap(), binary);
    }

    #[test]
    fn short_column_value_is_rejected() {
        let err = BinaryUuid::try_from(vec![0u8; 4]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedIdentifier(_)));
    }
}
