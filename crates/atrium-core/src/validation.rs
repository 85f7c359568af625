//! # Validation Module
//!
//! Input validation utilities for Atrium PMS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (front desk surface, future API)                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (business rule validation)                       │
//! │  ├── Guest registration fields                                         │
//! │  ├── Stay date ordering                                                │
//! │  └── Rate sign checks                                                  │
//! │                                                                         │
//! │  Everything past this module may assume validated input.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atrium_core::validation::{validate_phone, validate_stay_dates};
//! use chrono::NaiveDate;
//!
//! validate_phone("555-0199").unwrap();
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//! assert_eq!(validate_stay_dates(check_in, check_out).unwrap(), 3); // nights
//! ```

use chrono::NaiveDate;

use crate::error::{HotelError, HotelResult, ValidationError};
use crate::money::Money;
use crate::{MAX_NAME_LEN, MIN_PHONE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a guest email.
///
/// ## Rules
/// - Must not be empty
///
/// Format is deliberately not checked; the registration contract only
/// rejects the empty string.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    Ok(())
}

/// Validates a guest phone number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least `MIN_PHONE_LEN` (7) characters
///
/// ## Example
/// ```rust
/// use atrium_core::validation::validate_phone;
///
/// assert!(validate_phone("555-0199").is_ok());
/// assert!(validate_phone("").is_err());
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() < MIN_PHONE_LEN {
        return Err(ValidationError::TooShort {
            field: "phone".to_string(),
            min: MIN_PHONE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates a nightly rate.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for comped rooms)
///
/// Service prices are NOT passed through this check: the service ledger
/// accepts non-positive prices as-is (credits, comps), matching the
/// established folio behavior.
pub fn validate_nightly_rate(rate: Money) -> ValidationResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::NegativeRate {
            field: "nightly_rate".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a stay date range and returns the number of nights.
///
/// ## Rules
/// - `check_out` must be strictly after `check_in` (no zero-night stays)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Front desk: New Booking                                                │
/// │                                                                         │
/// │  Check-in:  2024-01-01                                                 │
/// │  Check-out: 2024-01-04                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_stay_dates(...) ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       ├── check_out <= check_in? → Error: InvalidDateRange             │
/// │       │                                                                 │
/// │       └── OK → nights = 3, proceed with pricing                        │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> HotelResult<i64> {
    if check_out <= check_in {
        return Err(HotelError::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    Ok((check_out - check_in).num_days())
}

// =============================================================================
// Unit Tests
// =============================================================================
