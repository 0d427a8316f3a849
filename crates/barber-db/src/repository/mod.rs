//! # Repository Module
//!
//! Database repository implementations for Barber POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.sales().list_by_day(day)                                   │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── insert(&self, sale)                                               │
//! │  └── list_by_day(&self, day)                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`service::ServiceRepository`] - Service catalog create/list/delete
//! - [`barber::BarberRepository`] - Barber create/list/delete
//! - [`sale::SaleRepository`] - Sale recording and date lookup

pub mod barber;
pub mod sale;
pub mod service;
