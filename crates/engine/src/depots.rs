//! Depots.
//!
//! A depot is a stock-holding location. Depots flagged as warehouses are
//! upstream distribution points: exits from them additionally feed the
//! consumption statistics.
//!
//! This engine only reads depots; it never creates or mutates them.

use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, entity::prelude::*};

use crate::{ResultEngine, ident::BinaryUuid, lookup};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Depot {
    pub uuid: BinaryUuid,
    pub name: String,
    pub is_warehouse: bool,
}

/// Resolve a depot by its human-readable name (the `text` column).
pub async fn by_name(db: &DatabaseConnection, name: &str) -> ResultEngine<Depot> {
    let model = lookup::exactly_one(
        Entity::find().filter(Column::Text.eq(name)),
        db,
        "depot",
        name,
    )
    .await?;

    Depot::try_from(model)
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "depot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Vec<u8>,
    pub text: String,
    pub is_warehouse: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Depot {
    type Error = crate::EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: BinaryUuid::try_from(model.uuid)?,
            name: model.text,
            is_warehouse: model.is_warehouse,
        })
    }
}
