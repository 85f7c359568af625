//! # Room Types
//!
//! Rooms, room kinds, and amenity management.
//!
//! ## Flattened Kind Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Room = base + tagged kind                        │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │  Room (shared fields)    │      │  RoomKind (variant payload)  │    │
//! │  │  ──────────────────────  │      │  ──────────────────────────  │    │
//! │  │  number (identity)       │◄─────│  Single { work_desk, .. }    │    │
//! │  │  amenities (set)         │      │  Double { balcony, .. }      │    │
//! │  │  nightly_rate (Money)    │      │  Suite  { jacuzzi, .. }      │    │
//! │  │  available (flag)        │      └──────────────────────────────┘    │
//! │  └──────────────────────────┘                                          │
//! │                                                                         │
//! │  Kind-specific behavior dispatches on the variant tag, not on a        │
//! │  class hierarchy.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Availability Invariant
//! `available` is `false` exactly while a confirmed booking holds the room.
//! Only the booking engine flips it on booking creation/cancellation/
//! completion; inventory admin calls may also set it directly, at their own
//! risk of desynchronizing from the booking ledger.

use serde::{Deserialize, Serialize};

use crate::error::HotelResult;
use crate::money::Money;
use crate::validation::validate_nightly_rate;

// =============================================================================
// Room Category
// =============================================================================

/// The coarse room category tag used for availability filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Single,
    Double,
    Suite,
}

// =============================================================================
// Room Kind
// =============================================================================

/// Kind-specific room payload.
///
/// Replaces a Single/Double/Suite class hierarchy with one tagged variant;
/// behavior that used to be a virtual override is a match on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomKind {
    /// One guest, optionally set up for business travel.
    Single {
        single_bed: bool,
        max_occupancy: u8,
        work_desk: bool,
    },
    /// Two-bed room, optionally connecting to a neighbor.
    Double {
        beds: u8,
        balcony: bool,
        connecting: bool,
    },
    /// Multi-room suite.
    Suite {
        rooms: u8,
        kitchen: bool,
        jacuzzi: bool,
    },
}

impl RoomKind {
    /// Returns the category tag for this kind.
    pub fn category(&self) -> RoomCategory {
        match self {
            RoomKind::Single { .. } => RoomCategory::Single,
            RoomKind::Double { .. } => RoomCategory::Double,
            RoomKind::Suite { .. } => RoomCategory::Suite,
        }
    }
}

// =============================================================================
// Room
// =============================================================================

/// A physical room in the hotel.
///
/// ## Identity
/// The room number is unique and immutable; the inventory keys on it.
///
/// ## Invariants
/// - `amenities` has set semantics: no duplicates, insertion order kept
/// - `nightly_rate` is never negative (validated at construction and update)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room number (identity, immutable).
    pub number: u32,

    /// Kind-specific payload.
    pub kind: RoomKind,

    /// Amenity tags, set semantics.
    pub amenities: Vec<String>,

    /// Current nightly rate. Bookings snapshot this at creation time, so
    /// changing it never reprices an existing stay.
    pub nightly_rate: Money,

    /// Availability flag. `false` while a confirmed booking holds the room.
    pub available: bool,
}

impl Room {
    /// Creates a new available room.
    ///
    /// Duplicate amenity tags in the input are dropped, keeping the first
    /// occurrence.
    ///
    /// ## Errors
    /// `ValidationError::NegativeRate` if the nightly rate is negative.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::money::Money;
    /// use atrium_core::room::{Room, RoomKind};
    ///
    /// let room = Room::new(
    ///     204,
    ///     RoomKind::Double { beds: 2, balcony: true, connecting: false },
    ///     vec!["WiFi".into(), "TV".into()],
    ///     Money::from_cents(10000),
    /// )
    /// .unwrap();
    /// assert!(room.available);
    /// ```
    pub fn new(
        number: u32,
        kind: RoomKind,
        amenities: Vec<String>,
        nightly_rate: Money,
    ) -> HotelResult<Self> {
        validate_nightly_rate(nightly_rate)?;

        let mut deduped: Vec<String> = Vec::with_capacity(amenities.len());
        for amenity in amenities {
            if !deduped.contains(&amenity) {
                deduped.push(amenity);
            }
        }

        Ok(Room {
            number,
            kind,
            amenities: deduped,
            nightly_rate,
            available: true,
        })
    }

    /// Returns the category tag for filtering.
    #[inline]
    pub fn category(&self) -> RoomCategory {
        self.kind.category()
    }

    /// Sets the availability flag. Idempotent.
    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    /// Replaces the nightly rate.
    ///
    /// Affects future bookings only; existing bookings keep their snapshot.
    pub fn update_rate(&mut self, rate: Money) -> HotelResult<()> {
        validate_nightly_rate(rate)?;
        self.nightly_rate = rate;
        Ok(())
    }

    /// Adds an amenity tag. Soft failure: returns `false` if already present.
    pub fn add_amenity(&mut self, amenity: &str) -> bool {
        if self.amenities.iter().any(|a| a == amenity) {
            return false;
        }
        self.amenities.push(amenity.to_string());
        true
    }

    /// Removes an amenity tag. Soft failure: returns `false` if absent.
    pub fn remove_amenity(&mut self, amenity: &str) -> bool {
        let before = self.amenities.len();
        self.amenities.retain(|a| a != amenity);
        self.amenities.len() != before
    }

    /// Checks for an amenity tag.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    // =========================================================================
    // Kind-Dispatched Behavior
    // =========================================================================

    /// Sets a single room up for business travel: work desk in, work lamp
    /// added to the amenities.
    ///
    /// Soft failure: returns `false` for non-single rooms.
    pub fn set_up_for_business(&mut self) -> bool {
        if let RoomKind::Single { work_desk, .. } = &mut self.kind {
            *work_desk = true;
        } else {
            return false;
        }
        self.add_amenity("Work Lamp");
        true
    }

    /// Splits a double room's beds apart.
    ///
    /// Soft failure: returns `false` for non-double rooms.
    pub fn separate_beds(&mut self) -> bool {
        matches!(self.kind, RoomKind::Double { .. })
    }

    /// Arranges concierge service for a suite.
    ///
    /// Soft failure: returns `false` for non-suite rooms.
    pub fn arrange_special_service(&mut self) -> bool {
        matches!(self.kind, RoomKind::Suite { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> Room {
        Room::new(
            101,
            RoomKind::Single {
                single_bed: true,
                max_occupancy: 1,
                work_desk: false,
            },
            vec!["WiFi".into()],
            Money::from_cents(8000),
        )
        .unwrap()
    }

    #[test]
    fn test_new_room_is_available() {
        let room = single();
        assert!(room.available);
        assert_eq!(room.category(), RoomCategory::Single);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = Room::new(
            101,
            RoomKind::Single {
                single_bed: true,
                max_occupancy: 1,
                work_desk: false,
            },
            vec![],
            Money::from_cents(-1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_amenity_set_semantics() {
        let mut room = single();

        assert!(room.add_amenity("TV"));
        assert!(!room.add_amenity("TV")); // duplicate add is a no-op
        assert_eq!(room.amenities, vec!["WiFi", "TV"]);

        assert!(room.remove_amenity("TV"));
        assert!(!room.remove_amenity("TV")); // missing remove is a no-op
        assert!(!room.has_amenity("TV"));
    }

    #[test]
    fn test_constructor_dedups_amenities() {
        let room = Room::new(
            102,
            RoomKind::Suite {
                rooms: 3,
                kitchen: true,
                jacuzzi: true,
            },
            vec!["WiFi".into(), "TV".into(), "WiFi".into()],
            Money::from_cents(25000),
        )
        .unwrap();
        assert_eq!(room.amenities, vec!["WiFi", "TV"]);
    }

    #[test]
    fn test_set_up_for_business_single_only() {
        let mut room = single();
        assert!(room.set_up_for_business());
        assert!(room.has_amenity("Work Lamp"));
        assert!(matches!(
            room.kind,
            RoomKind::Single {
                work_desk: true,
                ..
            }
        ));

        // Re-running keeps the amenity set clean
        assert!(room.set_up_for_business());
        assert_eq!(
            room.amenities.iter().filter(|a| *a == "Work Lamp").count(),
            1
        );

        let mut double = Room::new(
            201,
            RoomKind::Double {
                beds: 2,
                balcony: false,
                connecting: false,
            },
            vec![],
            Money::from_cents(12000),
        )
        .unwrap();
        assert!(!double.set_up_for_business());
        assert!(double.separate_beds());
        assert!(!double.arrange_special_service());
    }

    #[test]
    fn test_update_rate() {
        let mut room = single();
        room.update_rate(Money::from_cents(9000)).unwrap();
        assert_eq!(room.nightly_rate.cents(), 9000);
        assert!(room.update_rate(Money::from_cents(-500)).is_err());
    }
}
