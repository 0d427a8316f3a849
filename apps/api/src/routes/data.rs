//! `GET /api/data`: everything the checkout screen needs on load.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use barber_core::{Barber, Service};

use crate::error::{ApiError, ApiResult};
use crate::SharedState;

/// Services and barbers, each ordered by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialData {
    pub services: Vec<Service>,
    pub barbers: Vec<Barber>,
}

/// Returns the full service catalog and barber roster.
///
/// The two reads run one after the other without a shared transaction, so a
/// write landing between them is visible in the second list only.
pub async fn initial_data(State(state): State<SharedState>) -> ApiResult<Json<InitialData>> {
    let services = state.db.services().list().await.map_err(ApiError::read)?;
    let barbers = state.db.barbers().list().await.map_err(ApiError::read)?;

    Ok(Json(InitialData { services, barbers }))
}
