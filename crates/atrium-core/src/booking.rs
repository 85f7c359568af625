//! # Booking Engine
//!
//! The booking state machine, stay pricing, and the engine that keeps room
//! availability consistent with booking state.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Booking Lifecycle                                  │
//! │                                                                         │
//! │   make_booking                                                          │
//! │       │  (room flag → unavailable)                                      │
//! │       ▼                                                                 │
//! │  ┌───────────┐   cancel    ┌───────────┐                               │
//! │  │ Confirmed │ ──────────► │ Cancelled │  (room flag → available)      │
//! │  │           │             └───────────┘                               │
//! │  │           │   complete  ┌───────────┐                               │
//! │  │           │ ──────────► │ Completed │  (room flag → available)      │
//! │  └───────────┘             └───────────┘                               │
//! │                                                                         │
//! │  Cancelled and Completed are terminal: cancel/complete from either     │
//! │  is a soft failure (`false`, no state change). Bookings are never      │
//! │  deleted; terminal bookings stay in the ledger as history.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! `total = nights × nightly_rate + Σ service prices`. The nightly rate is
//! frozen at booking creation (the snapshot pattern: later room rate changes
//! never reprice an existing stay), while service prices are re-summed live
//! on every query and every attachment.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{HotelError, HotelResult};
use crate::ids::IdSequence;
use crate::inventory::RoomInventory;
use crate::money::Money;
use crate::service::{Service, ServiceStatus};
use crate::validation::validate_stay_dates;

// =============================================================================
// Booking Status
// =============================================================================

/// The status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Active reservation; the room's availability flag is down.
    Confirmed,
    /// Terminal: guest cancelled before the stay.
    Cancelled,
    /// Terminal: stay finished and the folio was settled.
    Completed,
}

impl BookingStatus {
    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A reservation of one room by one guest for a date range.
///
/// Guest and room are referenced by lookup key (guest id, room number), not
/// owned: a booking outliving its guest record or room is representable and
/// inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Booking id (identity, monotonic per engine).
    pub id: u64,

    pub guest_id: u64,
    pub room_number: u32,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    /// Nightly rate snapshot taken at creation.
    pub nightly_rate: Money,

    pub status: BookingStatus,

    /// Attached services, exclusively owned by this booking.
    services: Vec<Service>,

    /// Cached total in cents, refreshed on every service attachment.
    /// Queries recompute from scratch; this field exists so a serialized
    /// booking carries its folio total without the reader re-deriving it.
    total_cents: i64,
}

impl Booking {
    /// Constructs a confirmed booking. Only the engine calls this; the
    /// date range must already be validated.
    pub(crate) fn new(
        id: u64,
        guest_id: u64,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        nightly_rate: Money,
    ) -> Self {
        let mut booking = Booking {
            id,
            guest_id,
            room_number,
            check_in,
            check_out,
            nightly_rate,
            status: BookingStatus::Confirmed,
            services: Vec::new(),
            total_cents: 0,
        };
        booking.total_cents = booking.total().cents();
        booking
    }

    /// Number of nights, always positive for a constructed booking.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Recomputes the folio total: `nights × nightly_rate + Σ services`.
    pub fn total(&self) -> Money {
        let base = self.nightly_rate.multiply_quantity(self.nights());
        let services: Money = self.services.iter().map(|s| s.price).sum();
        base + services
    }

    /// Attaches a service and refreshes the cached total.
    ///
    /// Deliberately NOT guarded by status: late charges land on terminal
    /// bookings too (minibar discovered after check-out).
    pub fn attach_service(&mut self, service: Service) -> Money {
        self.services.push(service);
        let total = self.total();
        self.total_cents = total.cents();
        total
    }

    /// Attached services, in attachment order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Looks up an attached service by id, mutably.
    pub(crate) fn service_mut(&mut self, service_id: u64) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.id == service_id)
    }

    /// Sends the booking confirmation (delivery itself is the host's job).
    ///
    /// Returns `Ok(false)` without error for cancelled bookings. The legacy
    /// contract also fails with `MissingDates` when either stay date is
    /// absent; stay dates are non-optional here, so that arm is
    /// unrepresentable and only the error kind survives.
    pub fn send_confirmation(&self) -> HotelResult<bool> {
        if self.status == BookingStatus::Cancelled {
            return Ok(false);
        }
        Ok(true)
    }

    /// `Confirmed → Cancelled`. Soft failure from any other status.
    pub(crate) fn mark_cancelled(&mut self) -> bool {
        if self.status == BookingStatus::Confirmed {
            self.status = BookingStatus::Cancelled;
            true
        } else {
            false
        }
    }

    /// `Confirmed → Completed`. Soft failure from any other status.
    pub(crate) fn mark_completed(&mut self) -> bool {
        if self.status == BookingStatus::Confirmed {
            self.status = BookingStatus::Completed;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Booking Engine
// =============================================================================

/// Owns the booking ledger and drives every transition that touches room
/// availability.
///
/// ## Invariant
/// A room's availability flag is `false` exactly while a `Confirmed` booking
/// references it. The engine is the only code that flips the flag as part of
/// a booking transition, so checking and flipping stay in one place.
#[derive(Debug, Clone, Default)]
pub struct BookingEngine {
    bookings: BTreeMap<u64, Booking>,
    ids: IdSequence,
}

impl BookingEngine {
    pub fn new() -> Self {
        BookingEngine {
            bookings: BTreeMap::new(),
            ids: IdSequence::new(),
        }
    }

    /// Creates a confirmed booking and takes the room.
    ///
    /// ## Errors
    /// - `InvalidDateRange` when `check_out <= check_in`
    /// - `RoomNotFound` for an unknown room number
    /// - `RoomUnavailable` when the room's flag is already down
    pub fn make_booking(
        &mut self,
        inventory: &mut RoomInventory,
        guest_id: u64,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> HotelResult<u64> {
        validate_stay_dates(check_in, check_out)?;

        let room = inventory
            .get(room_number)
            .ok_or(HotelError::RoomNotFound(room_number))?;
        if !room.available {
            return Err(HotelError::RoomUnavailable { room_number });
        }
        let nightly_rate = room.nightly_rate;

        let id = self.ids.next_id();
        inventory.set_availability(room_number, false)?;

        let booking = Booking::new(id, guest_id, room_number, check_in, check_out, nightly_rate);
        info!(
            booking = id,
            guest = guest_id,
            room = room_number,
            nights = booking.nights(),
            total = %booking.total(),
            "Booking confirmed"
        );
        self.bookings.insert(id, booking);

        Ok(id)
    }

    /// `Confirmed → Cancelled`, releasing the room.
    ///
    /// Soft failure: `Ok(false)` with no state change if the booking is not
    /// `Confirmed`. Hard failure only for an unknown booking id.
    pub fn cancel(&mut self, inventory: &mut RoomInventory, booking_id: u64) -> HotelResult<bool> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?;

        if !booking.mark_cancelled() {
            return Ok(false);
        }

        Self::release_room(inventory, booking.room_number, booking_id);
        info!(booking = booking_id, "Booking cancelled");
        Ok(true)
    }

    /// `Confirmed → Completed`, releasing the room.
    ///
    /// Soft failure: `Ok(false)` with no state change if the booking is not
    /// `Confirmed`. Hard failure only for an unknown booking id.
    pub fn complete(
        &mut self,
        inventory: &mut RoomInventory,
        booking_id: u64,
    ) -> HotelResult<bool> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?;

        if !booking.mark_completed() {
            return Ok(false);
        }

        Self::release_room(inventory, booking.room_number, booking_id);
        info!(booking = booking_id, "Booking completed");
        Ok(true)
    }

    /// Attaches a service to a booking and returns the refreshed total.
    ///
    /// ## Errors
    /// `BookingNotFound` for an unknown booking id.
    pub fn attach_service(&mut self, booking_id: u64, service: Service) -> HotelResult<Money> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?;

        debug!(
            booking = booking_id,
            service = service.id,
            price = %service.price,
            "Attaching service"
        );
        Ok(booking.attach_service(service))
    }

    /// Updates the status of a service attached to a booking.
    ///
    /// ## Errors
    /// `BookingNotFound` / `ServiceNotFound` for unknown ids.
    pub fn update_service_status(
        &mut self,
        booking_id: u64,
        service_id: u64,
        status: ServiceStatus,
        today: NaiveDate,
    ) -> HotelResult<bool> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?;
        let service = booking
            .service_mut(service_id)
            .ok_or(HotelError::ServiceNotFound(service_id))?;

        Ok(service.update_status(status, today))
    }

    /// Recomputes a booking's folio total.
    pub fn total_price(&self, booking_id: u64) -> HotelResult<Money> {
        self.bookings
            .get(&booking_id)
            .map(Booking::total)
            .ok_or(HotelError::BookingNotFound(booking_id))
    }

    /// Looks up a booking by id.
    pub fn get(&self, booking_id: u64) -> Option<&Booking> {
        self.bookings.get(&booking_id)
    }

    /// Number of bookings ever made (the ledger never shrinks).
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Puts the room's availability flag back up on a terminal transition.
    ///
    /// A missing room means the caller removed it while a confirmed booking
    /// still held it (the inventory cannot enforce that cross-reference);
    /// the transition itself stands, so this only warns.
    fn release_room(inventory: &mut RoomInventory, room_number: u32, booking_id: u64) {
        if inventory.set_availability(room_number, true).is_err() {
            warn!(
                booking = booking_id,
                room = room_number,
                "Room was removed while a confirmed booking held it"
            );
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Room, RoomKind};
    use crate::service::ServiceLedger;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inventory_with_room(number: u32, rate_cents: i64) -> RoomInventory {
        let mut inventory = RoomInventory::new();
        inventory
            .add_room(
                Room::new(
                    number,
                    RoomKind::Double {
                        beds: 2,
                        balcony: false,
                        connecting: false,
                    },
                    vec![],
                    Money::from_cents(rate_cents),
                )
                .unwrap(),
            )
            .unwrap();
        inventory
    }

    #[test]
    fn test_make_booking_takes_room() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();

        assert_eq!(id, 1);
        assert!(!inventory.get(204).unwrap().available);
        assert_eq!(engine.get(id).unwrap().status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();

        let err = engine
            .make_booking(&mut inventory, 2, 204, date(2024, 2, 1), date(2024, 2, 4))
            .unwrap_err();
        assert!(matches!(err, HotelError::RoomUnavailable { room_number: 204 }));
    }

    #[test]
    fn test_invalid_range_rejected_before_any_side_effect() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let err = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 4), date(2024, 1, 4))
            .unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));
        assert!(inventory.get(204).unwrap().available);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_unknown_room_rejected() {
        let mut inventory = RoomInventory::new();
        let mut engine = BookingEngine::new();

        let err = engine
            .make_booking(&mut inventory, 1, 999, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap_err();
        assert!(matches!(err, HotelError::RoomNotFound(999)));
    }

    #[test]
    fn test_cancel_releases_room_and_second_cancel_is_noop() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        assert!(!inventory.get(204).unwrap().available);

        assert!(engine.cancel(&mut inventory, id).unwrap());
        assert!(inventory.get(204).unwrap().available);
        assert_eq!(engine.get(id).unwrap().status, BookingStatus::Cancelled);

        // Second cancel: soft failure, nothing changes
        assert!(!engine.cancel(&mut inventory, id).unwrap());
        assert_eq!(engine.get(id).unwrap().status, BookingStatus::Cancelled);

        // Complete after cancel: also a soft failure
        assert!(!engine.complete(&mut inventory, id).unwrap());
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();

        assert!(engine.complete(&mut inventory, id).unwrap());
        assert!(inventory.get(204).unwrap().available);
        assert!(!engine.cancel(&mut inventory, id).unwrap());
    }

    #[test]
    fn test_pricing_base_plus_services() {
        // $100/night, Jan 1 → Jan 4 = 3 nights = $300 base
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();
        let mut ledger = ServiceLedger::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        assert_eq!(engine.total_price(id).unwrap().cents(), 30000);

        // Attach a $50 service → $350
        let service = ledger.create("spa", "Massage", Money::from_cents(5000), date(2024, 1, 2));
        let total = engine.attach_service(id, service).unwrap();
        assert_eq!(total.cents(), 35000);
        assert_eq!(engine.total_price(id).unwrap().cents(), 35000);

        // Each further attachment keeps the sum consistent
        let service = ledger.create("bar", "Minibar", Money::from_cents(850), date(2024, 1, 3));
        assert_eq!(engine.attach_service(id, service).unwrap().cents(), 35850);
    }

    #[test]
    fn test_rate_is_snapshotted_at_creation() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();

        // Reprice the room: the existing booking must not move
        inventory
            .get_mut(204)
            .unwrap()
            .update_rate(Money::from_cents(99999))
            .unwrap();
        assert_eq!(engine.total_price(id).unwrap().cents(), 30000);
    }

    #[test]
    fn test_attach_service_on_terminal_booking_allowed() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();
        let mut ledger = ServiceLedger::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        engine.complete(&mut inventory, id).unwrap();

        // Late minibar charge after check-out
        let service = ledger.create("bar", "Minibar", Money::from_cents(850), date(2024, 1, 5));
        let total = engine.attach_service(id, service).unwrap();
        assert_eq!(total.cents(), 30850);
    }

    #[test]
    fn test_service_status_update_through_engine() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();
        let mut ledger = ServiceLedger::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        let service = ledger.create("spa", "Massage", Money::from_cents(5000), date(2024, 1, 2));
        let service_id = service.id;
        engine.attach_service(id, service).unwrap();

        assert!(engine
            .update_service_status(id, service_id, ServiceStatus::Completed, date(2024, 1, 3))
            .unwrap());
        let booking = engine.get(id).unwrap();
        assert_eq!(booking.services()[0].completed_on, Some(date(2024, 1, 3)));

        let err = engine
            .update_service_status(id, 999, ServiceStatus::Completed, date(2024, 1, 3))
            .unwrap_err();
        assert!(matches!(err, HotelError::ServiceNotFound(999)));
    }

    #[test]
    fn test_send_confirmation() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        assert!(engine.get(id).unwrap().send_confirmation().unwrap());

        engine.cancel(&mut inventory, id).unwrap();
        assert!(!engine.get(id).unwrap().send_confirmation().unwrap());
    }

    #[test]
    fn test_cancel_survives_room_removed_behind_engines_back() {
        let mut inventory = inventory_with_room(204, 10000);
        let mut engine = BookingEngine::new();

        let id = engine
            .make_booking(&mut inventory, 1, 204, date(2024, 1, 1), date(2024, 1, 4))
            .unwrap();
        inventory.remove_room(204).unwrap();

        // The transition stands even though the room is gone
        assert!(engine.cancel(&mut inventory, id).unwrap());
        assert_eq!(engine.get(id).unwrap().status, BookingStatus::Cancelled);
    }
}
