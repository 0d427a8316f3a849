//! Barber roster routes: `POST /api/barbers`, `DELETE /api/barbers/{id}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use barber_core::validation::required;
use barber_core::{Barber, NewBarber};

use super::DeleteResponse;
use crate::error::{ApiError, ApiResult};
use crate::SharedState;

/// Body of `POST /api/barbers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBarberRequest {
    pub name: Option<String>,
    pub commission: Option<i64>,
}

/// Adds a barber and echoes it back with its id.
pub async fn create_barber(
    State(state): State<SharedState>,
    payload: Result<Json<CreateBarberRequest>, JsonRejection>,
) -> ApiResult<Json<Barber>> {
    let Json(request) = payload?;

    let name = required(request.name, "name")?;
    let commission = required(request.commission, "commission")?;
    let barber = NewBarber::new(&name, commission)?;

    let barber = state
        .db
        .barbers()
        .insert(&barber)
        .await
        .map_err(ApiError::write)?;

    info!(id = barber.id, name = %barber.name, commission = barber.commission, "Barber created");
    Ok(Json(barber))
}

/// Removes a barber. Sales keep the name they were recorded with.
pub async fn delete_barber(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    let changes = state
        .db
        .barbers()
        .delete(id)
        .await
        .map_err(ApiError::write)?;

    info!(id, changes, "Barber deleted");
    Ok(Json(DeleteResponse::new("Barber deleted", changes)))
}
