//! # Validation Module
//!
//! Field validation rules for Barber POS requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (apps/api)                                     │
//! │  ├── JSON shape (deserialization into request schemas)                 │
//! │  └── Missing fields → ValidationError::Required                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names non-empty, bounded length                                   │
//! │  ├── Prices finite and >= 0                                            │
//! │  └── Commission within 0..=100                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK constraints on price and commission                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::{MAX_COMMISSION_PERCENT, MAX_NAME_LEN, MAX_PAYMENT_METHOD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Presence
// =============================================================================

/// Unwraps an optional request field, failing with `Required` when absent.
///
/// ## Example
/// ```rust
/// use barber_core::validation::required;
///
/// assert_eq!(required(Some(5), "price").unwrap(), 5);
/// assert!(required::<i64>(None, "price").is_err());
/// ```
pub fn required<T>(value: Option<T>, field: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::required(field))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (service, barber or sold line).
///
/// ## Rules
/// - Must not be blank after trimming
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required(field));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a payment method label.
///
/// Free-form ("cash", "card", "transfer", ...), but never blank.
pub fn validate_payment_method(method: &str) -> ValidationResult<()> {
    let method = method.trim();

    if method.is_empty() {
        return Err(ValidationError::required("paymentMethod"));
    }

    if method.chars().count() > MAX_PAYMENT_METHOD_LEN {
        return Err(ValidationError::TooLong {
            field: "paymentMethod".to_string(),
            max: MAX_PAYMENT_METHOD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount.
///
/// ## Rules
/// - Must be finite (no NaN or infinity)
/// - Must be non-negative; zero is allowed (complimentary service)
///
/// ## Example
/// ```rust
/// use barber_core::validation::validate_price;
///
/// assert!(validate_price("price", 12.5).is_ok());
/// assert!(validate_price("price", 0.0).is_ok());
/// assert!(validate_price("price", -1.0).is_err());
/// ```
pub fn validate_price(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a commission percentage (0 to 100 inclusive).
pub fn validate_commission_percent(percent: i64) -> ValidationResult<()> {
    if !(0..=MAX_COMMISSION_PERCENT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "commission".to_string(),
            min: 0,
            max: MAX_COMMISSION_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a `YYYY-MM-DD` calendar date used to filter sales.
///
/// ## Rules
/// - Exactly ten characters, zero-padded
/// - Must be a real calendar date (no 2024-02-30)
///
/// ## Example
/// ```rust
/// use barber_core::validation::parse_sale_day;
///
/// let day = parse_sale_day("2024-01-15").unwrap();
/// assert_eq!(day.to_string(), "2024-01-15");
/// assert!(parse_sale_day("15/01/2024").is_err());
/// ```
pub fn parse_sale_day(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required("date"));
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    };

    if value.len() != 10 {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Haircut").is_ok());
        assert!(validate_name("name", "  Beard trim  ").is_ok());

        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::required("name"))
        );
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_payment_method() {
        assert!(validate_payment_method("cash").is_ok());
        assert!(validate_payment_method("").is_err());
        assert!(validate_payment_method(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 19.99).is_ok());
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_commission_percent() {
        assert!(validate_commission_percent(0).is_ok());
        assert!(validate_commission_percent(55).is_ok());
        assert!(validate_commission_percent(100).is_ok());
        assert!(validate_commission_percent(-5).is_err());
        assert!(validate_commission_percent(101).is_err());
    }

    #[test]
    fn test_parse_sale_day() {
        assert_eq!(
            parse_sale_day("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(parse_sale_day(""), Err(ValidationError::required("date")));
        assert!(parse_sale_day("2024-1-5").is_err());
        assert!(parse_sale_day("2024-02-30").is_err());
        assert!(parse_sale_day("2024-01-15T10:00:00Z").is_err());
    }

    #[test]
    fn test_required() {
        assert_eq!(
            required::<String>(None, "barber"),
            Err(ValidationError::required("barber"))
        );
    }
}
