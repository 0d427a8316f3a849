//! Service catalog routes: `POST /api/services`, `DELETE /api/services/{id}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use barber_core::validation::required;
use barber_core::{NewService, Service};

use super::DeleteResponse;
use crate::error::{ApiError, ApiResult};
use crate::SharedState;

/// Body of `POST /api/services`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Adds a service to the catalog and echoes it back with its id.
pub async fn create_service(
    State(state): State<SharedState>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> ApiResult<Json<Service>> {
    let Json(request) = payload?;

    let name = required(request.name, "name")?;
    let price = required(request.price, "price")?;
    let service = NewService::new(&name, price)?;

    let service = state
        .db
        .services()
        .insert(&service)
        .await
        .map_err(ApiError::write)?;

    info!(id = service.id, name = %service.name, "Service created");
    Ok(Json(service))
}

/// Removes a service; past sales keep their snapshot.
pub async fn delete_service(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    let changes = state
        .db
        .services()
        .delete(id)
        .await
        .map_err(ApiError::write)?;

    info!(id, changes, "Service deleted");
    Ok(Json(DeleteResponse::new("Service deleted", changes)))
}
