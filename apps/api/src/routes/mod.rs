//! # HTTP Routes
//!
//! One module per resource. Handlers are thin: parse the request schema,
//! hand it to barber-core for validation, then call a barber-db repository.
//!
//! - [`data`] - initial catalog + roster load
//! - [`sales`] - record a sale, list sales for a day
//! - [`services`] - service catalog create/delete
//! - [`barbers`] - barber roster create/delete
//! - [`health`] - liveness and database reachability

pub mod barbers;
pub mod data;
pub mod health;
pub mod sales;
pub mod services;

use serde::{Deserialize, Serialize};

/// Response body for the delete endpoints.
///
/// `changes` is 0 when the id did not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub changes: u64,
}

impl DeleteResponse {
    pub fn new(message: &str, changes: u64) -> Self {
        DeleteResponse {
            message: message.to_string(),
            changes,
        }
    }
}
