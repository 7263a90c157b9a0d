use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod movement {
    use super::*;

    /// One stock-movement submission as ODK posts it.
    ///
    /// ```json
    /// {
    ///   "depotToName": "Depot Principal",
    ///   "depotFromName": "Depot Secondaire",
    ///   "date": "2019-11-25",
    ///   "lots": ["VITAMINE-B", "QUININE-C"],
    ///   "isExit": 0
    /// }
    /// ```
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DepotMovementNew {
        pub depot_to_name: String,
        pub depot_from_name: String,
        pub date: NaiveDate,
        /// Lot labels, possibly empty; one ledger entry is written per label.
        pub lots: Vec<String>,
        /// 0 or 1, as the collector sends it.
        pub is_exit: u8,
    }

    /// Response to a recorded movement: the fresh document uuid correlating
    /// every ledger entry the submission produced.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct MovementCreated {
        pub uuid: Uuid,
    }
}
