//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`MalformedIdentifier`] thrown when an identifier does not parse to
//!   canonical form.
//! - [`NotFound`] thrown when a named depot or lot resolves to zero rows.
//! - [`Ambiguous`] thrown when a lookup matches more than one row.
//! - [`Database`] wrapping any failure from the store.
//!
//!  [`MalformedIdentifier`]: EngineError::MalformedIdentifier
//!  [`NotFound`]: EngineError::NotFound
//!  [`Ambiguous`]: EngineError::Ambiguous
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(String),
    #[error("no {entity} matches \"{key}\"")]
    NotFound { entity: &'static str, key: String },
    /// More than one row matched a lookup that the schema should keep unique.
    /// Kept distinct from [`EngineError::NotFound`] so data-integrity problems
    /// are visible as such.
    #[error("\"{key}\" matches more than one {entity}")]
    Ambiguous { entity: &'static str, key: String },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedIdentifier(a), Self::MalformedIdentifier(b)) => a == b,
            (
                Self::NotFound { entity, key },
                Self::NotFound {
                    entity: other_entity,
                    key: other_key,
                },
            ) => entity == other_entity && key == other_key,
            (
                Self::Ambiguous { entity, key },
                Self::Ambiguous {
                    entity: other_entity,
                    key: other_key,
                },
            ) => entity == other_entity && key == other_key,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
