//! # atrium-core: Pure Business Logic for Atrium PMS
//!
//! This crate is the **heart** of Atrium PMS. It models a hotel's
//! reservation lifecycle as pure in-process state with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Atrium PMS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Host surface (future API / desktop app)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls, single caller            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atrium-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │                    ┌─────────────────┐                          │   │
//! │  │                    │   HotelSystem   │  validation + delegation │   │
//! │  │                    └────────┬────────┘                          │   │
//! │  │        ┌──────────┬────────┼──────────┬─────────────┐          │   │
//! │  │        ▼          ▼        ▼          ▼             ▼          │   │
//! │  │  ┌──────────┐ ┌────────┐ ┌────────┐ ┌─────────┐ ┌─────────┐   │   │
//! │  │  │inventory │ │booking │ │service │ │ loyalty │ │ guests  │   │   │
//! │  │  │  Rooms   │ │ Engine │ │ Ledger │ │ Program │ │registry │   │   │
//! │  │  └──────────┘ └────────┘ └────────┘ └─────────┘ └─────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`system`] - The `HotelSystem` coordinator façade
//! - [`inventory`] / [`room`] - Room records and availability
//! - [`booking`] - The booking state machine and stay pricing
//! - [`service`] - Service requests attached to booking folios
//! - [`loyalty`] - Points, tiers, and the reward catalog
//! - [`guest`] - Guest profiles and point balances
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`ids`] - Monotonic id sequences
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Deterministic - dates come from the caller, never
//!    from the system clock
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: Contract violations are typed errors; expected
//!    no-ops are soft `false` returns - never strings, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atrium_core::{HotelSystem, Money, Room, RoomKind};
//! use chrono::NaiveDate;
//!
//! let mut hotel = HotelSystem::new();
//!
//! let guest = hotel.register_guest("Ada Lovelace", "ada@example.com", "555-0199").unwrap();
//! hotel.add_room(Room::new(
//!     204,
//!     RoomKind::Double { beds: 2, balcony: true, connecting: false },
//!     vec!["WiFi".into()],
//!     Money::from_cents(10000), // $100.00/night
//! ).unwrap()).unwrap();
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//! let booking = hotel.make_booking(guest, 204, check_in, check_out).unwrap();
//!
//! // 3 nights × $100.00
//! assert_eq!(hotel.booking_total(booking).unwrap().cents(), 30000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod error;
pub mod guest;
pub mod ids;
pub mod inventory;
pub mod loyalty;
pub mod money;
pub mod room;
pub mod service;
pub mod system;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atrium_core::Money` instead of
// `use atrium_core::money::Money`

pub use booking::{Booking, BookingEngine, BookingStatus};
pub use error::{HotelError, HotelResult, ValidationError};
pub use guest::Guest;
pub use inventory::RoomInventory;
pub use loyalty::LoyaltyProgram;
pub use money::Money;
pub use room::{Room, RoomCategory, RoomKind};
pub use service::{compute_cost, Service, ServiceLedger, ServiceStatus};
pub use system::HotelSystem;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The implicit loyalty tier floor: every guest below the lowest configured
/// threshold is `Regular`, and `Regular` needs no threshold entry.
pub const REGULAR_TIER: &str = "Regular";

/// Minimum accepted phone number length at guest registration.
///
/// ## Business Reason
/// Shortest dialable number the front desk will call back; anything shorter
/// is a typo.
pub const MIN_PHONE_LEN: usize = 7;

/// Maximum accepted guest name length.
///
/// ## Business Reason
/// Prevents pasted garbage from ending up on folios and confirmations.
pub const MAX_NAME_LEN: usize = 200;
