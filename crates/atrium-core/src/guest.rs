//! # Guest Records
//!
//! Guest profile plus loyalty point state.
//!
//! The loyalty *tier* is deliberately not stored on the guest: it is always
//! recomputed from the point balance by [`crate::loyalty::LoyaltyProgram`],
//! so it can never go stale after an earn or redeem.

use serde::{Deserialize, Serialize};

use crate::error::HotelResult;
use crate::validation::{validate_email, validate_guest_name, validate_phone};

/// A registered guest.
///
/// ## Invariants
/// - `loyalty_points` never goes negative: `redeem_points` refuses to
///   underflow
/// - `booking_history` is append-only; it stores booking ids, not bookings,
///   so guest lifetime is independent of the booking ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Guest id (identity, issued by the coordinator's person sequence).
    pub id: u64,

    pub name: String,
    pub email: String,
    pub phone: String,

    /// Current loyalty point balance.
    pub loyalty_points: i64,

    /// Booking ids, in creation order.
    booking_history: Vec<u64>,
}

impl Guest {
    /// Creates a guest with an empty history and zero points.
    ///
    /// Field validation happens at the registration boundary
    /// ([`crate::system::HotelSystem::register_guest`]), not here.
    pub fn new(id: u64, name: String, email: String, phone: String) -> Self {
        Guest {
            id,
            name,
            email,
            phone,
            loyalty_points: 0,
            booking_history: Vec::new(),
        }
    }

    /// Replaces the profile fields, re-running registration validation.
    pub fn update_profile(&mut self, name: &str, email: &str, phone: &str) -> HotelResult<()> {
        validate_guest_name(name)?;
        validate_email(email)?;
        validate_phone(phone)?;

        self.name = name.to_string();
        self.email = email.to_string();
        self.phone = phone.to_string();
        Ok(())
    }

    /// Adds points to the balance (no upper bound) and returns the new
    /// balance.
    pub fn earn_points(&mut self, points: i64) -> i64 {
        self.loyalty_points += points;
        self.loyalty_points
    }

    /// Deducts points from the balance.
    ///
    /// Soft failure: returns `false` and leaves the balance unchanged if the
    /// deduction would underflow.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::guest::Guest;
    ///
    /// let mut guest = Guest::new(1, "Ada".into(), "ada@example.com".into(), "555-0199".into());
    /// guest.earn_points(100);
    ///
    /// assert!(!guest.redeem_points(150)); // balance unchanged
    /// assert_eq!(guest.loyalty_points, 100);
    /// assert!(guest.redeem_points(40));
    /// assert_eq!(guest.loyalty_points, 60);
    /// ```
    pub fn redeem_points(&mut self, points: i64) -> bool {
        if self.loyalty_points >= points {
            self.loyalty_points -= points;
            true
        } else {
            false
        }
    }

    /// Appends a booking id to the history.
    pub fn record_booking(&mut self, booking_id: u64) {
        self.booking_history.push(booking_id);
    }

    /// Booking ids in creation order.
    pub fn booking_history(&self) -> &[u64] {
        &self.booking_history
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
