//! # barber-core: Pure Business Logic for Barber POS
//!
//! This crate holds the domain model of the barbershop point of sale and the
//! only piece of real business logic in the system: recording a sale with
//! its commission.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barber POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │    GET /api/data, POST /api/sales, DELETE /api/services/{id}   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barber-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────────┐  ┌───────────────┐          │   │
//! │  │   │   types   │  │     sale      │  │  validation   │          │   │
//! │  │   │  Service  │  │  record_sale  │  │   names       │          │   │
//! │  │   │  Barber   │  │  NewSale      │  │   prices      │          │   │
//! │  │   │  Sale     │  │  commission   │  │   dates       │          │   │
//! │  │   └───────────┘  └───────────────┘  └───────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    barber-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Service, Barber, Sale, CommissionRate)
//! - [`sale`] - The sale recorder
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use barber_core::sale::{record_sale, BarberSnapshot, SaleInput};
//! use barber_core::ServiceLine;
//! use chrono::Utc;
//!
//! let input = SaleInput {
//!     barber: BarberSnapshot { name: "Alex".into(), commission: 40 },
//!     services: vec![ServiceLine { name: "Cut".into(), price: 20.0 }],
//!     total_price: 20.0,
//!     payment_method: "cash".into(),
//! };
//!
//! let sale = record_sale(input, Utc::now()).unwrap();
//! assert_eq!(sale.commission_total, 8.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use sale::{record_sale, NewSale};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a service or barber name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a payment method label ("cash", "card", ...).
pub const MAX_PAYMENT_METHOD_LEN: usize = 50;

/// Upper bound of a barber's commission, in percent.
pub const MAX_COMMISSION_PERCENT: i64 = 100;
