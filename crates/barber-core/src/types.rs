//! # Domain Types
//!
//! Core domain types used throughout Barber POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Service      │   │     Barber      │   │        Sale         │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (rowid)     │   │  id (rowid)     │   │  id (rowid)         │   │
//! │  │  name           │   │  name           │   │  barber_name  ◄─ snapshot
//! │  │  price          │   │  commission %   │   │  services     ◄─ snapshot
//! │  └─────────────────┘   └─────────────────┘   │  total_price        │   │
//! │                                              │  commission_total   │   │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  sale_date          │   │
//! │  │  ServiceLine    │   │ CommissionRate  │   └─────────────────────┘   │
//! │  │  name, price    │   │  0..=100 %      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A sale never references a barber or service row. It copies the barber's
//! name and each service's name and price at the moment of the sale, so later
//! deletions leave history intact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_commission_percent, validate_name, validate_price, ValidationResult,
};

// =============================================================================
// Commission Rate
// =============================================================================

/// A barber's commission in whole percent (0 to 100).
///
/// Only constructed through [`CommissionRate::from_percent`] (deserialization
/// goes through it too), so a value of this type is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "i64")]
#[ts(export)]
pub struct CommissionRate(u8);

impl TryFrom<i64> for CommissionRate {
    type Error = ValidationError;

    fn try_from(percent: i64) -> ValidationResult<Self> {
        CommissionRate::from_percent(percent)
    }
}

impl From<CommissionRate> for i64 {
    fn from(rate: CommissionRate) -> Self {
        i64::from(rate.0)
    }
}

impl CommissionRate {
    /// Creates a rate from a percentage, rejecting values outside 0..=100.
    pub fn from_percent(percent: i64) -> ValidationResult<Self> {
        validate_commission_percent(percent)?;
        Ok(CommissionRate(percent as u8))
    }

    /// Returns the rate in percent.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Applies the rate to an amount: `amount × (percent / 100)`.
    ///
    /// The fraction is taken first so the result never exceeds `amount` and
    /// stays finite for any finite input.
    ///
    /// ## Example
    /// ```rust
    /// use barber_core::CommissionRate;
    ///
    /// let rate = CommissionRate::from_percent(40).unwrap();
    /// assert_eq!(rate.apply(20.0), 8.0);
    /// ```
    pub fn apply(&self, amount: f64) -> f64 {
        amount * (f64::from(self.0) / 100.0)
    }
}

// =============================================================================
// Service
// =============================================================================

/// A sellable barbershop offering with a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Service {
    /// Generated row identifier.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, e.g. "Haircut".
    pub name: String,

    /// Price in currency units (non-negative).
    pub price: f64,
}

/// A validated service ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub price: f64,
}

impl NewService {
    /// Validates the fields and trims the name.
    pub fn new(name: &str, price: f64) -> ValidationResult<Self> {
        validate_name("name", name)?;
        validate_price("price", price)?;

        Ok(NewService {
            name: name.trim().to_string(),
            price,
        })
    }
}

// =============================================================================
// Barber
// =============================================================================

/// A staff member with an associated commission percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Barber {
    /// Generated row identifier.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Commission in whole percent (0 to 100).
    #[ts(type = "number")]
    pub commission: i64,
}

/// A validated barber ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBarber {
    pub name: String,
    pub commission: CommissionRate,
}

impl NewBarber {
    /// Validates the fields and trims the name.
    pub fn new(name: &str, commission: i64) -> ValidationResult<Self> {
        validate_name("name", name)?;
        let commission = CommissionRate::from_percent(commission)?;

        Ok(NewBarber {
            name: name.trim().to_string(),
            commission,
        })
    }
}

// =============================================================================
// Service Line (snapshot)
// =============================================================================

/// A service as it was sold: name and price frozen at the time of sale.
///
/// Extra fields in the incoming JSON (such as the catalog `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceLine {
    pub name: String,
    pub price: f64,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed transaction as stored and returned by the sales query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    #[ts(type = "number")]
    pub id: i64,

    /// Barber name at the time of sale (frozen).
    pub barber_name: String,

    /// Services sold, in the order they were submitted (frozen).
    pub services: Vec<ServiceLine>,

    pub total_price: f64,

    pub payment_method: String,

    /// `total_price × commission / 100` with the commission captured at sale time.
    pub commission_total: f64,

    /// Serialized exactly as stored: `2024-01-15T10:30:00.000Z`.
    #[serde(with = "crate::sale::sale_date_format")]
    #[ts(as = "String")]
    pub sale_date: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_commission_rate_bounds() {
        assert_eq!(CommissionRate::from_percent(0).unwrap().percent(), 0);
        assert_eq!(CommissionRate::from_percent(100).unwrap().percent(), 100);
        assert!(CommissionRate::from_percent(-1).is_err());
        assert!(CommissionRate::from_percent(101).is_err());
    }

    #[test]
    fn test_commission_rate_apply() {
        let rate = CommissionRate::from_percent(40).unwrap();
        assert_eq!(rate.apply(20.0), 8.0);

        let rate = CommissionRate::from_percent(15).unwrap();
        assert!((rate.apply(33.33) - 4.9995).abs() < 1e-9);

        let zero = CommissionRate::from_percent(0).unwrap();
        assert_eq!(zero.apply(120.0), 0.0);
    }

    #[test]
    fn test_commission_rate_apply_large_amounts() {
        let rate = CommissionRate::from_percent(40).unwrap();
        let commission = rate.apply(1e308);
        assert!(commission.is_finite());
        assert!((commission - 4e307).abs() <= 4e307 * 1e-15);

        let full = CommissionRate::from_percent(100).unwrap();
        assert_eq!(full.apply(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_commission_rate_deserialize_checks_range() {
        let rate: CommissionRate = serde_json::from_str("40").unwrap();
        assert_eq!(rate.percent(), 40);
        assert_eq!(serde_json::to_string(&rate).unwrap(), "40");

        assert!(serde_json::from_str::<CommissionRate>("250").is_err());
        assert!(serde_json::from_str::<CommissionRate>("-1").is_err());
    }

    #[test]
    fn test_sale_date_serializes_with_millis() {
        let sale = Sale {
            id: 1,
            barber_name: "Alex".to_string(),
            services: vec![ServiceLine {
                name: "Cut".to_string(),
                price: 20.0,
            }],
            total_price: 20.0,
            payment_method: "cash".to_string(),
            commission_total: 8.0,
            sale_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["sale_date"], "2024-01-15T10:30:00.000Z");

        let back: Sale = serde_json::from_value(json).unwrap();
        assert_eq!(back, sale);
    }

    #[test]
    fn test_new_service_trims_name() {
        let service = NewService::new("  Shave ", 10.0).unwrap();
        assert_eq!(service.name, "Shave");
        assert_eq!(service.price, 10.0);
    }

    #[test]
    fn test_new_service_rejects_bad_input() {
        assert!(NewService::new("", 10.0).is_err());
        assert!(NewService::new("Shave", -1.0).is_err());
        assert!(NewService::new("Shave", f64::NAN).is_err());
    }

    #[test]
    fn test_new_barber() {
        let barber = NewBarber::new("Alex", 40).unwrap();
        assert_eq!(barber.name, "Alex");
        assert_eq!(barber.commission.percent(), 40);

        assert!(NewBarber::new("   ", 40).is_err());
        assert!(NewBarber::new("Alex", 150).is_err());
    }

    #[test]
    fn test_service_line_ignores_catalog_id() {
        let line: ServiceLine =
            serde_json::from_str(r#"{"id": 7, "name": "Cut", "price": 20}"#).unwrap();
        assert_eq!(
            line,
            ServiceLine {
                name: "Cut".to_string(),
                price: 20.0
            }
        );
    }
}
