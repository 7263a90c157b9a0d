//! Depot movement API endpoint

use api_types::movement::{DepotMovementNew, MovementCreated};
use axum::{Json, extract::State, http::StatusCode};
use engine::{DepotMovementCmd, MovementMetadata};

use crate::{ServerError, server::ServerState};

/// Handle stock-movement submissions pushed by the ODK collector.
///
/// `isExit` arrives as 0/1 and is normalized to a strict flag here; the
/// engine only ever sees a bool.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepotMovementNew>,
) -> Result<(StatusCode, Json<MovementCreated>), ServerError> {
    let metadata = MovementMetadata::default();
    let cmd = DepotMovementCmd {
        depot_from_name: payload.depot_from_name,
        depot_to_name: payload.depot_to_name,
        date: payload.date,
        lot_labels: payload.lots,
        is_exit: payload.is_exit != 0,
        metadata,
    };

    let uuid = state.engine.depot_movement(cmd).await?;
    tracing::info!(
        %uuid,
        project_id = metadata.project_id,
        enterprise_id = metadata.enterprise_id,
        "depot movement recorded"
    );

    Ok((StatusCode::CREATED, Json(MovementCreated { uuid })))
}
