//! Lots.
//!
//! A lot is a tracked batch of a stocked item, identified by label and
//! carrying a per-unit cost. The optional `inventory_uuid` links the lot back
//! to its originating inventory record; warehouse exits use it to recompute
//! consumption statistics.
//!
//! Like depots, lots are read-only from this engine's point of view.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, QueryFilter, entity::prelude::*};
use tokio::task::JoinSet;

use crate::{ResultEngine, ident::BinaryUuid, lookup};

#[derive(Clone, Debug, PartialEq)]
pub struct Lot {
    pub uuid: BinaryUuid,
    pub label: String,
    pub unit_cost: f64,
    pub inventory_uuid: Option<BinaryUuid>,
}

/// Resolve a lot by its label.
pub async fn by_label(db: &DatabaseConnection, label: &str) -> ResultEngine<Lot> {
    let model = lookup::exactly_one(
        Entity::find().filter(Column::Label.eq(label)),
        db,
        "lot",
        label,
    )
    .await?;

    Lot::try_from(model)
}

/// Resolve every label concurrently, preserving input order in the result.
///
/// The lookups are independent reads, so they all go out at once; the first
/// failure aborts the batch (remaining tasks are dropped with the set).
pub async fn by_labels(db: &DatabaseConnection, labels: &[String]) -> ResultEngine<Vec<Lot>> {
    if labels.is_empty() {
        return Ok(Vec::new());
    }

    let mut lookups = JoinSet::new();
    for (index, label) in labels.iter().enumerate() {
        let db = db.clone();
        let label = label.clone();
        lookups.spawn(async move { (index, by_label(&db, &label).await) });
    }

    let mut resolved: Vec<Option<Lot>> = labels.iter().map(|_| None).collect();
    while let Some(joined) = lookups.join_next().await {
        let (index, lot) =
            joined.map_err(|err| DbErr::Custom(format!("lot lookup task failed: {err}")))?;
        resolved[index] = Some(lot?);
    }

    Ok(resolved.into_iter().flatten().collect())
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Vec<u8>,
    pub label: String,
    pub unit_cost: f64,
    pub inventory_uuid: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Lot {
    type Error = crate::EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: BinaryUuid::try_from(model.uuid)?,
            label: model.label,
            unit_cost: model.unit_cost,
            inventory_uuid: model.inventory_uuid.map(BinaryUuid::try_from).transpose()?,
        })
    }
}
