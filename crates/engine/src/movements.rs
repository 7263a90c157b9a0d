//! Movement planning.
//!
//! One ODK submission becomes one [`MovementDocument`] and, per lot, one
//! [`StockMovementEntry`] plus at most one [`ConsumptionUpdate`]. Planning is
//! pure: it never touches the store. The resulting records know how to render
//! themselves as parameterized statements for the batch executor.

use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, Statement};
use uuid::Uuid;

use crate::{
    depots::Depot,
    ident::{self, BinaryUuid},
    lots::Lot,
};

/// Flux classification for stock leaving toward another depot.
pub const FLUX_TO_OTHER_DEPOT: i16 = 8;
/// Flux classification for stock arriving from another depot.
pub const FLUX_FROM_OTHER_DEPOT: i16 = 2;

/// ODK submissions carry no acting user; everything is recorded against the
/// integration account.
pub const DEFAULT_USER_ID: i32 = 1;
pub const DEFAULT_PROJECT_ID: i32 = 1;
pub const DEFAULT_ENTERPRISE_ID: i32 = 1;

const MOVEMENT_DESCRIPTION: &str = "Reception from ODK";

/// The umbrella record correlating every ledger entry of one ingest call.
///
/// Only its uuid is persisted, as the `document_uuid` column on each entry;
/// callers keep it as the handle for duplicate detection downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementDocument {
    pub uuid: Uuid,
    pub date: NaiveDate,
    pub user_id: i32,
}

impl MovementDocument {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            uuid: ident::generate(),
            date,
            user_id: DEFAULT_USER_ID,
        }
    }
}

/// Reporting tags attached to a movement. The engine carries them through
/// untouched; nothing in the ledger interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementMetadata {
    pub project_id: i32,
    pub enterprise_id: i32,
}

impl Default for MovementMetadata {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID,
            enterprise_id: DEFAULT_ENTERPRISE_ID,
        }
    }
}

/// One lot as the submission requests it moved.
///
/// `quantity` is pinned at 1: the ODK form lists lots without quantities, so
/// every listed lot contributes exactly one unit. The per-lot `is_exit` and
/// `flux_id` defaults mirror what the collector sends; the movement-level
/// direction and flux supersede them when entries are emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct LotRequest {
    pub uuid: BinaryUuid,
    pub depot_uuid: BinaryUuid,
    pub quantity: i32,
    pub unit_cost: f64,
    pub is_exit: bool,
    pub flux_id: i16,
    pub inventory_uuid: Option<BinaryUuid>,
}

impl LotRequest {
    pub fn new(lot: &Lot, depot_to: &Depot) -> Self {
        Self {
            uuid: lot.uuid,
            depot_uuid: depot_to.uuid,
            quantity: 1,
            unit_cost: lot.unit_cost,
            is_exit: false,
            flux_id: FLUX_FROM_OTHER_DEPOT,
            inventory_uuid: lot.inventory_uuid,
        }
    }
}

/// Everything the planner needs, fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementSpec {
    pub depot_from: Depot,
    pub depot_to: Depot,
    pub is_exit: bool,
    pub lots: Vec<LotRequest>,
    pub document: MovementDocument,
    pub metadata: MovementMetadata,
}

/// One ledger line of the stock ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct StockMovementEntry {
    pub uuid: BinaryUuid,
    pub document_uuid: BinaryUuid,
    pub depot_uuid: BinaryUuid,
    pub entity_uuid: BinaryUuid,
    pub is_exit: bool,
    pub flux_id: i16,
    pub lot_uuid: BinaryUuid,
    pub quantity: i32,
    pub unit_cost: f64,
    pub date: NaiveDate,
    pub description: String,
    pub user_id: i32,
}

impl StockMovementEntry {
    /// Parameterized insert for this entry.
    pub fn statement(&self, backend: DatabaseBackend) -> Statement {
        Statement::from_sql_and_values(
            backend,
            "INSERT INTO stock_movement \
             (uuid, document_uuid, depot_uuid, entity_uuid, is_exit, flux_id, \
              lot_uuid, quantity, unit_cost, date, description, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            vec![
                self.uuid.into(),
                self.document_uuid.into(),
                self.depot_uuid.into(),
                self.entity_uuid.into(),
                self.is_exit.into(),
                self.flux_id.into(),
                self.lot_uuid.into(),
                self.quantity.into(),
                self.unit_cost.into(),
                self.date.into(),
                self.description.clone().into(),
                self.user_id.into(),
            ],
        )
    }
}

/// Consumption-statistics recomputation for one lot leaving a warehouse.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsumptionUpdate {
    pub inventory_uuid: BinaryUuid,
    pub depot_uuid: BinaryUuid,
    pub date: NaiveDate,
    pub quantity: i32,
}

impl ConsumptionUpdate {
    /// Parameterized recomputation call.
    ///
    /// MySQL exposes the recomputation as a stored procedure; backends
    /// without procedures get the equivalent upsert against the
    /// `stock_consumption` aggregate. Parameter order is identical.
    pub fn statement(&self, backend: DatabaseBackend) -> Statement {
        let sql = match backend {
            DatabaseBackend::MySql => "CALL ComputeStockConsumptionByDate(?, ?, ?, ?)",
            _ => {
                "INSERT INTO stock_consumption (inventory_uuid, depot_uuid, date, quantity) \
                 VALUES (?, ?, ?, ?) \
                 ON CONFLICT (inventory_uuid, depot_uuid, date) \
                 DO UPDATE SET quantity = quantity + excluded.quantity"
            }
        };

        Statement::from_sql_and_values(
            backend,
            sql,
            vec![
                self.inventory_uuid.into(),
                self.depot_uuid.into(),
                self.date.into(),
                self.quantity.into(),
            ],
        )
    }
}

/// The planned effects of one movement, one group per lot, in request order.
#[derive(Clone, Debug, PartialEq)]
pub struct LotMovement {
    pub entry: StockMovementEntry,
    pub consumption: Option<ConsumptionUpdate>,
}

/// Turn a resolved movement into its ledger entries and side effects.
///
/// The primary depot is the one whose balance the entry tracks: the origin
/// for exits, the destination otherwise; the counterparty is the other end.
/// Exits from a warehouse additionally schedule one consumption recomputation
/// per lot that carries an inventory link.
pub fn plan(spec: &MovementSpec) -> Vec<LotMovement> {
    let flux_id = if spec.is_exit {
        FLUX_TO_OTHER_DEPOT
    } else {
        FLUX_FROM_OTHER_DEPOT
    };
    let (depot, entity) = if spec.is_exit {
        (&spec.depot_from, &spec.depot_to)
    } else {
        (&spec.depot_to, &spec.depot_from)
    };

    spec.lots
        .iter()
        .map(|lot| {
            let entry = StockMovementEntry {
                uuid: ident::generate().into(),
                document_uuid: spec.document.uuid.into(),
                depot_uuid: depot.uuid,
                entity_uuid: entity.uuid,
                is_exit: spec.is_exit,
                flux_id,
                lot_uuid: lot.uuid,
                quantity: lot.quantity,
                unit_cost: lot.unit_cost,
                date: spec.document.date,
                description: MOVEMENT_DESCRIPTION.to_string(),
                user_id: spec.document.user_id,
            };

            let consumption = (spec.is_exit && spec.depot_from.is_warehouse)
                .then(|| {
                    lot.inventory_uuid.map(|inventory_uuid| ConsumptionUpdate {
                        inventory_uuid,
                        depot_uuid: spec.depot_from.uuid,
                        date: spec.document.date,
                        quantity: lot.quantity,
                    })
                })
                .flatten();

            LotMovement { entry, consumption }
        })
        .collect()
}
