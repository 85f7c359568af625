//! # Service Ledger
//!
//! Guest service requests (room service, spa, laundry) and their lifecycle.
//!
//! Services are created by the ledger and then owned exclusively by the
//! booking they are attached to; the ledger only issues ids and initial
//! state. Dates are passed in by the caller so the core stays clock-free.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::IdSequence;
use crate::money::Money;

// =============================================================================
// Service Status
// =============================================================================

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Request received, not yet started.
    Requested,
    /// Staff is working the request.
    InProgress,
    /// Done; `completed_on` is stamped.
    Completed,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Requested
    }
}

// =============================================================================
// Service
// =============================================================================

/// A single service request attached to a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Service id (identity, monotonic per ledger).
    pub id: u64,

    /// Type tag ("room_service", "spa", ...). Free-form by design.
    pub service_type: String,

    pub description: String,

    /// Price charged onto the booking folio.
    ///
    /// The sign is intentionally NOT validated: non-positive prices are
    /// accepted as-is and show up as credits or comps on the folio.
    pub price: Money,

    pub status: ServiceStatus,

    /// Date the request was made.
    pub requested_on: NaiveDate,

    /// Stamped when the status becomes `Completed`.
    pub completed_on: Option<NaiveDate>,
}

impl Service {
    /// Sets the status, stamping `completed_on` when it becomes `Completed`.
    ///
    /// There is no guard against re-completing: stamping `Completed` twice
    /// simply refreshes the completion date (idempotent re-stamp).
    pub fn update_status(&mut self, status: ServiceStatus, today: NaiveDate) -> bool {
        self.status = status;
        if status == ServiceStatus::Completed {
            self.completed_on = Some(today);
        }
        true
    }
}

/// Pure cost helper: `quantity × unit_price`. No side effects.
pub fn compute_cost(quantity: i64, unit_price: Money) -> Money {
    unit_price.multiply_quantity(quantity)
}

// =============================================================================
// Service Ledger
// =============================================================================

/// Issues service ids and initial service state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLedger {
    ids: IdSequence,
}

impl ServiceLedger {
    pub fn new() -> Self {
        ServiceLedger {
            ids: IdSequence::new(),
        }
    }

    /// Creates a new `Requested` service stamped with the given date.
    pub fn create(
        &mut self,
        service_type: &str,
        description: &str,
        price: Money,
        today: NaiveDate,
    ) -> Service {
        Service {
            id: self.ids.next_id(),
            service_type: service_type.to_string(),
            description: description.to_string(),
            price,
            status: ServiceStatus::Requested,
            requested_on: today,
            completed_on: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_service() {
        let mut ledger = ServiceLedger::new();
        let service = ledger.create(
            "room_service",
            "Club sandwich",
            Money::from_cents(1850),
            date(2024, 1, 2),
        );

        assert_eq!(service.id, 1);
        assert_eq!(service.status, ServiceStatus::Requested);
        assert_eq!(service.requested_on, date(2024, 1, 2));
        assert!(service.completed_on.is_none());

        let next = ledger.create("spa", "Massage", Money::from_cents(9000), date(2024, 1, 2));
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_non_positive_price_accepted() {
        // Comps and credits flow through the same ledger, unvalidated.
        let mut ledger = ServiceLedger::new();
        let comp = ledger.create("comp", "Late check-in apology", Money::from_cents(-2000), date(2024, 1, 2));
        assert_eq!(comp.price.cents(), -2000);
    }

    #[test]
    fn test_complete_stamps_date() {
        let mut ledger = ServiceLedger::new();
        let mut service = ledger.create(
            "laundry",
            "Two shirts",
            Money::from_cents(1200),
            date(2024, 1, 2),
        );

        assert!(service.update_status(ServiceStatus::InProgress, date(2024, 1, 2)));
        assert!(service.completed_on.is_none());

        assert!(service.update_status(ServiceStatus::Completed, date(2024, 1, 3)));
        assert_eq!(service.completed_on, Some(date(2024, 1, 3)));

        // Idempotent re-stamp refreshes the date
        assert!(service.update_status(ServiceStatus::Completed, date(2024, 1, 4)));
        assert_eq!(service.completed_on, Some(date(2024, 1, 4)));
    }

    #[test]
    fn test_compute_cost_is_pure() {
        assert_eq!(compute_cost(3, Money::from_cents(1850)).cents(), 5550);
        assert_eq!(compute_cost(0, Money::from_cents(1850)).cents(), 0);
    }
}
