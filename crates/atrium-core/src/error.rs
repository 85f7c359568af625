//! # Error Types
//!
//! Domain-specific error types for atrium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atrium-core errors (this file)                                        │
//! │  ├── HotelError       - Reservation domain errors                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → HotelError → caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hard vs Soft Failure
//! Hard failures (an `Err` from this module) mark contract violations that
//! the caller must handle explicitly: double-registering a room, booking an
//! occupied room, an inverted date range. Soft failures are the legitimate
//! no-ops of the domain (cancelling an already-cancelled booking, removing
//! an amenity that is not there, redeeming beyond the point balance) and are
//! reported as a plain `false` with no state change. The two are never
//! interchangeable: each operation documents which one it uses.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (room number, booking id, dates)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Hotel Error
// =============================================================================

/// Reservation domain errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are raised synchronously at the point of violation and never retried.
#[derive(Debug, Error)]
pub enum HotelError {
    /// A room with this number is already registered.
    #[error("Room {0} is already registered")]
    DuplicateRoom(u32),

    /// Room cannot be found in the inventory.
    #[error("Room {0} not found")]
    RoomNotFound(u32),

    /// Guest cannot be found in the registry.
    #[error("Guest {0} not found")]
    GuestNotFound(u64),

    /// Booking cannot be found in the engine.
    #[error("Booking {0} not found")]
    BookingNotFound(u64),

    /// Service cannot be found on the booking it was claimed to be on.
    #[error("Service {0} not found on booking")]
    ServiceNotFound(u64),

    /// Check-out date is not strictly after check-in date.
    ///
    /// ## When This Occurs
    /// - Same-day "stay" requested (zero nights)
    /// - Dates passed in reversed order
    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Booking attempted on a room whose availability flag is down.
    ///
    /// ## When This Occurs
    /// - A confirmed booking already holds the room
    /// - The room was taken between an availability search and the booking
    ///   call (single-caller model, so only by the caller's own sequencing)
    #[error("Room {room_number} is not available for the selected dates")]
    RoomUnavailable { room_number: u32 },

    /// Confirmation attempted on a booking without both stay dates.
    ///
    /// Stay dates are non-optional in this model, so this cannot be
    /// constructed through the public API; the kind is kept because the
    /// confirmation contract names it.
    #[error("Booking dates are missing")]
    MissingDates,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A rate that must not be negative was negative.
    #[error("{field} must not be negative")]
    NegativeRate { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with HotelError.
pub type HotelResult<T> = Result<T, HotelError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HotelError::RoomUnavailable { room_number: 204 };
        assert_eq!(
            err.to_string(),
            "Room 204 is not available for the selected dates"
        );

        let err = HotelError::InvalidDateRange {
            check_in: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Check-out 2024-01-01 must be after check-in 2024-01-04"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "phone".to_string(),
            min: 7,
        };
        assert_eq!(err.to_string(), "phone must be at least 7 characters");
    }

    #[test]
    fn test_validation_converts_to_hotel_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let hotel_err: HotelError = validation_err.into();
        assert!(matches!(hotel_err, HotelError::Validation(_)));
    }
}
