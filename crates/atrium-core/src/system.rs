//! # Hotel System Coordinator
//!
//! Wires the inventory, booking engine, service ledger, loyalty program, and
//! guest registry together behind one façade.
//!
//! ## Orchestration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     HotelSystem Orchestration                           │
//! │                                                                         │
//! │  Caller                     Coordinator              Owned Components   │
//! │  ──────                     ───────────              ────────────────   │
//! │                                                                         │
//! │  register_guest ──────────► validate ──────────────► guest registry     │
//! │                                                                         │
//! │  make_booking ────────────► guest check ───────────► BookingEngine      │
//! │                                                      └► RoomInventory   │
//! │                                                         (flag down)     │
//! │                                                                         │
//! │  request_service ─────────► ServiceLedger ─────────► Booking folio      │
//! │                                                                         │
//! │  record_settlement ───────► LoyaltyProgram ────────► Guest points       │
//! │  (external payment hand-off: amount + type in, new balance out)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The coordinator holds no business logic of its own beyond validation and
//! delegation; every rule lives in the component that owns the state.
//!
//! ## Concurrency
//! `&mut self` throughout: the model serves a single in-process caller. A
//! host that wants concurrent callers wraps the whole system in its own
//! exclusive lock; the check-then-reserve and check-then-deduct sequences
//! are only safe because nothing interleaves them.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::booking::{Booking, BookingEngine};
use crate::error::{HotelError, HotelResult};
use crate::guest::Guest;
use crate::ids::IdSequence;
use crate::inventory::RoomInventory;
use crate::loyalty::LoyaltyProgram;
use crate::money::Money;
use crate::room::{Room, RoomCategory};
use crate::service::{Service, ServiceLedger, ServiceStatus};
use crate::validation::{validate_email, validate_guest_name, validate_phone};

/// The single-process hotel model.
pub struct HotelSystem {
    inventory: RoomInventory,
    engine: BookingEngine,
    ledger: ServiceLedger,
    loyalty: LoyaltyProgram,
    guests: HashMap<u64, Guest>,
    person_ids: IdSequence,
}

impl HotelSystem {
    /// Creates a system running the house loyalty program.
    pub fn new() -> Self {
        Self::with_loyalty(LoyaltyProgram::standard())
    }

    /// Creates a system with a custom loyalty program configuration.
    pub fn with_loyalty(loyalty: LoyaltyProgram) -> Self {
        HotelSystem {
            inventory: RoomInventory::new(),
            engine: BookingEngine::new(),
            ledger: ServiceLedger::new(),
            loyalty,
            guests: HashMap::new(),
            person_ids: IdSequence::new(),
        }
    }

    // =========================================================================
    // Guests
    // =========================================================================

    /// Registers a guest and returns the issued guest id.
    ///
    /// ## Errors
    /// `Validation`: empty name or email, phone shorter than 7 characters.
    pub fn register_guest(&mut self, name: &str, email: &str, phone: &str) -> HotelResult<u64> {
        validate_guest_name(name)?;
        validate_email(email)?;
        validate_phone(phone)?;

        let id = self.person_ids.next_id();
        info!(guest = id, "Guest registered");
        self.guests.insert(
            id,
            Guest::new(id, name.to_string(), email.to_string(), phone.to_string()),
        );
        Ok(id)
    }

    /// Looks up a guest by id.
    pub fn guest(&self, guest_id: u64) -> Option<&Guest> {
        self.guests.get(&guest_id)
    }

    /// Replaces a guest's profile fields, re-validating them.
    pub fn update_guest_profile(
        &mut self,
        guest_id: u64,
        name: &str,
        email: &str,
        phone: &str,
    ) -> HotelResult<()> {
        self.guests
            .get_mut(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?
            .update_profile(name, email, phone)
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Registers a room. `DuplicateRoom` if the number is taken.
    pub fn add_room(&mut self, room: Room) -> HotelResult<()> {
        self.inventory.add_room(room)
    }

    /// Removes a room regardless of availability. `RoomNotFound` if unknown.
    pub fn remove_room(&mut self, number: u32) -> HotelResult<Room> {
        self.inventory.remove_room(number)
    }

    /// Looks up a room by number.
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.inventory.get(number)
    }

    /// Rooms whose availability flag is up, optionally filtered by category.
    /// `InvalidDateRange` when `check_out <= check_in`.
    pub fn find_available_rooms(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        category: Option<RoomCategory>,
    ) -> HotelResult<Vec<&Room>> {
        self.inventory.find_available(check_in, check_out, category)
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Books a room for a guest and returns the booking id. The booking also
    /// lands in the guest's history.
    ///
    /// ## Errors
    /// `GuestNotFound`, `InvalidDateRange`, `RoomNotFound`,
    /// `RoomUnavailable`.
    pub fn make_booking(
        &mut self,
        guest_id: u64,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> HotelResult<u64> {
        if !self.guests.contains_key(&guest_id) {
            return Err(HotelError::GuestNotFound(guest_id));
        }

        let booking_id =
            self.engine
                .make_booking(&mut self.inventory, guest_id, room_number, check_in, check_out)?;

        // Guest presence was checked above; the entry is still there.
        if let Some(guest) = self.guests.get_mut(&guest_id) {
            guest.record_booking(booking_id);
        }

        Ok(booking_id)
    }

    /// Looks up a booking by id.
    pub fn booking(&self, booking_id: u64) -> Option<&Booking> {
        self.engine.get(booking_id)
    }

    /// Cancels a booking, releasing the room. Soft `Ok(false)` if the
    /// booking is not `Confirmed`.
    pub fn cancel_booking(&mut self, booking_id: u64) -> HotelResult<bool> {
        self.engine.cancel(&mut self.inventory, booking_id)
    }

    /// Completes a booking, releasing the room. Soft `Ok(false)` if the
    /// booking is not `Confirmed`.
    pub fn complete_booking(&mut self, booking_id: u64) -> HotelResult<bool> {
        self.engine.complete(&mut self.inventory, booking_id)
    }

    /// Recomputes a booking's folio total.
    pub fn booking_total(&self, booking_id: u64) -> HotelResult<Money> {
        self.engine.total_price(booking_id)
    }

    /// Sends the confirmation for a booking. `Ok(false)` if cancelled.
    pub fn send_confirmation(&self, booking_id: u64) -> HotelResult<bool> {
        self.engine
            .get(booking_id)
            .ok_or(HotelError::BookingNotFound(booking_id))?
            .send_confirmation()
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Creates a service request and attaches it to the booking's folio.
    /// Returns a copy of the attached service.
    ///
    /// The price sign is not validated: non-positive prices are accepted
    /// as-is and act as folio credits.
    ///
    /// ## Errors
    /// `GuestNotFound`, `BookingNotFound`.
    pub fn request_service(
        &mut self,
        guest_id: u64,
        booking_id: u64,
        service_type: &str,
        description: &str,
        price: Money,
        today: NaiveDate,
    ) -> HotelResult<Service> {
        if !self.guests.contains_key(&guest_id) {
            return Err(HotelError::GuestNotFound(guest_id));
        }

        let service = self.ledger.create(service_type, description, price, today);
        let snapshot = service.clone();
        let total = self.engine.attach_service(booking_id, service)?;
        debug!(
            booking = booking_id,
            service = snapshot.id,
            total = %total,
            "Service requested"
        );

        Ok(snapshot)
    }

    /// Marks an attached service `Completed`, stamping the completion date.
    ///
    /// ## Errors
    /// `BookingNotFound`, `ServiceNotFound`.
    pub fn complete_service(
        &mut self,
        booking_id: u64,
        service_id: u64,
        today: NaiveDate,
    ) -> HotelResult<bool> {
        self.engine
            .update_service_status(booking_id, service_id, ServiceStatus::Completed, today)
    }

    // =========================================================================
    // Loyalty
    // =========================================================================

    /// The Payment/Invoice hand-off: a settled transaction amount and type
    /// come in, points are calculated and credited, and the guest's new
    /// balance goes out.
    ///
    /// ## Errors
    /// `GuestNotFound`.
    pub fn record_settlement(
        &mut self,
        guest_id: u64,
        amount: Money,
        transaction_type: &str,
    ) -> HotelResult<i64> {
        let points = self.loyalty.calculate_points(amount, transaction_type);
        let guest = self
            .guests
            .get_mut(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?;
        let balance = guest.earn_points(points);

        info!(
            guest = guest_id,
            amount = %amount,
            transaction_type,
            points,
            balance,
            "Settlement recorded"
        );
        Ok(balance)
    }

    /// The guest's current tier, derived from the live balance.
    pub fn guest_status(&self, guest_id: u64) -> HotelResult<&str> {
        let guest = self
            .guests
            .get(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?;
        Ok(self.loyalty.determine_status(guest.loyalty_points))
    }

    /// Rewards the guest can redeem right now.
    pub fn available_rewards_for(&self, guest_id: u64) -> HotelResult<BTreeMap<String, i64>> {
        let guest = self
            .guests
            .get(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?;
        Ok(self.loyalty.available_rewards(guest.loyalty_points))
    }

    /// Redeems a reward by name. Soft `Ok(false)` if the reward is not
    /// currently available to this guest.
    pub fn redeem_reward(&mut self, guest_id: u64, reward_name: &str) -> HotelResult<bool> {
        let guest = self
            .guests
            .get_mut(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?;
        Ok(self.loyalty.redeem_reward(guest, reward_name))
    }
}

impl Default for HotelSystem {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
