//! Depot-movement transaction engine.
//!
//! Turns one ODK stock-movement submission into a batch of ledger rows,
//! committed atomically: resolve the named depots and lots, plan one entry
//! per lot (plus consumption recomputation for warehouse exits), execute the
//! whole unit in a single database transaction.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use uuid::Uuid;

pub use batch::StatementBatch;
pub use depots::Depot;
pub use error::EngineError;
pub use ident::BinaryUuid;
pub use lots::Lot;
pub use movements::{
    ConsumptionUpdate, LotMovement, LotRequest, MovementDocument, MovementMetadata, MovementSpec,
    StockMovementEntry,
};

mod batch;
pub mod depots;
mod error;
pub mod ident;
mod lookup;
pub mod lots;
pub mod movements;

type ResultEngine<T> = Result<T, EngineError>;

/// One depot-to-depot movement as submitted by the collector, before any
/// resolution. `is_exit` has already been normalized to a strict flag by the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepotMovementCmd {
    pub depot_from_name: String,
    pub depot_to_name: String,
    pub date: NaiveDate,
    pub lot_labels: Vec<String>,
    pub is_exit: bool,
    pub metadata: MovementMetadata,
}

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Record one depot-to-depot movement.
    ///
    /// Resolution of both depots and every lot runs concurrently; the ledger
    /// writes and any consumption recomputations then commit as one unit.
    /// Returns the fresh document uuid correlating the written entries. On
    /// any failure nothing is written and no uuid is returned.
    pub async fn depot_movement(&self, cmd: DepotMovementCmd) -> ResultEngine<Uuid> {
        let (depot_from, depot_to, lots) = tokio::try_join!(
            depots::by_name(&self.database, &cmd.depot_from_name),
            depots::by_name(&self.database, &cmd.depot_to_name),
            lots::by_labels(&self.database, &cmd.lot_labels),
        )?;

        let document = MovementDocument::new(cmd.date);
        let document_uuid = document.uuid;

        let spec = MovementSpec {
            lots: lots
                .iter()
                .map(|lot| LotRequest::new(lot, &depot_to))
                .collect(),
            depot_from,
            depot_to,
            is_exit: cmd.is_exit,
            document,
            metadata: cmd.metadata,
        };

        let backend = self.database.get_database_backend();
        let mut batch = StatementBatch::new();
        for movement in movements::plan(&spec) {
            batch.push(movement.entry.statement(backend));
            if let Some(consumption) = movement.consumption {
                batch.push(consumption.statement(backend));
            }
        }

        batch.execute(&self.database).await?;
        Ok(document_uuid)
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
