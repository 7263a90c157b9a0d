//! One-or-fail lookups.
//!
//! Every name-to-record resolution in the engine goes through
//! [`exactly_one`]: zero rows is a caller mistake, more than one row means
//! the schema failed to keep the lookup column unique.

use sea_orm::{DatabaseConnection, EntityTrait, Select};

use crate::error::EngineError;

/// Run `select` and require exactly one row.
///
/// `entity` and `key` only feed the error message, so a failed resolution
/// names what was looked up and by which value.
pub(crate) async fn exactly_one<E>(
    select: Select<E>,
    db: &DatabaseConnection,
    entity: &'static str,
    key: &str,
) -> Result<E::Model, EngineError>
where
    E: EntityTrait,
{
    let mut rows = select.all(db).await?;

    match (rows.pop(), rows.pop()) {
        (Some(row), None) => Ok(row),
        (None, _) => Err(EngineError::NotFound {
            entity,
            key: key.to_string(),
        }),
        (Some(_), Some(_)) => Err(EngineError::Ambiguous {
            entity,
            key: key.to_string(),
        }),
    }
}
