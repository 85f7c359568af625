//! # Room Inventory
//!
//! Owns the room records and answers availability queries.
//!
//! ## Availability Model
//! Availability is a single flag per room, not a calendar: a room is either
//! free right now or held by a confirmed booking. Two future stays on
//! non-overlapping dates cannot both be represented. This is a known,
//! deliberate simplification of the reservation model, not an oversight;
//! `find_available` still takes the stay dates so it can reject inverted
//! ranges and so a calendar model can slot in behind the same signature.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{HotelError, HotelResult};
use crate::room::{Room, RoomCategory};
use crate::validation::validate_stay_dates;

/// The hotel's room records, keyed by room number.
///
/// A `BTreeMap` keeps iteration (and therefore availability results) in
/// room-number order, which front desk surfaces rely on.
#[derive(Debug, Clone, Default)]
pub struct RoomInventory {
    rooms: BTreeMap<u32, Room>,
}

impl RoomInventory {
    pub fn new() -> Self {
        RoomInventory {
            rooms: BTreeMap::new(),
        }
    }

    /// Registers a room.
    ///
    /// ## Errors
    /// `DuplicateRoom` if the room number is already registered.
    pub fn add_room(&mut self, room: Room) -> HotelResult<()> {
        if self.rooms.contains_key(&room.number) {
            return Err(HotelError::DuplicateRoom(room.number));
        }
        debug!(room = room.number, rate = %room.nightly_rate, "Registering room");
        self.rooms.insert(room.number, room);
        Ok(())
    }

    /// Removes a room and returns it.
    ///
    /// Removal ignores the availability flag; this component has no
    /// visibility into bookings, so the caller is responsible for not
    /// removing a room a confirmed booking still holds.
    ///
    /// ## Errors
    /// `RoomNotFound` if the number is unknown.
    pub fn remove_room(&mut self, number: u32) -> HotelResult<Room> {
        self.rooms
            .remove(&number)
            .ok_or(HotelError::RoomNotFound(number))
    }

    /// Sets a room's availability flag. Idempotent.
    ///
    /// ## Errors
    /// `RoomNotFound` if the number is unknown.
    pub fn set_availability(&mut self, number: u32, available: bool) -> HotelResult<()> {
        let room = self
            .rooms
            .get_mut(&number)
            .ok_or(HotelError::RoomNotFound(number))?;
        room.set_availability(available);
        Ok(())
    }

    /// Returns the rooms whose availability flag is up, optionally filtered
    /// by category.
    ///
    /// ## Errors
    /// `InvalidDateRange` when `check_out <= check_in`.
    pub fn find_available(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        category: Option<RoomCategory>,
    ) -> HotelResult<Vec<&Room>> {
        validate_stay_dates(check_in, check_out)?;

        Ok(self
            .rooms
            .values()
            .filter(|room| room.available)
            .filter(|room| category.map_or(true, |c| room.category() == c))
            .collect())
    }

    /// Looks up a room by number.
    pub fn get(&self, number: u32) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Looks up a room by number, mutably.
    pub fn get_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.get_mut(&number)
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::room::RoomKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single(number: u32) -> Room {
        Room::new(
            number,
            RoomKind::Single {
                single_bed: true,
                max_occupancy: 1,
                work_desk: false,
            },
            vec![],
            Money::from_cents(8000),
        )
        .unwrap()
    }

    fn suite(number: u32) -> Room {
        Room::new(
            number,
            RoomKind::Suite {
                rooms: 3,
                kitchen: true,
                jacuzzi: true,
            },
            vec![],
            Money::from_cents(25000),
        )
        .unwrap()
    }

    #[test]
    fn test_add_duplicate_room_fails() {
        let mut inventory = RoomInventory::new();
        inventory.add_room(single(101)).unwrap();

        let err = inventory.add_room(single(101)).unwrap_err();
        assert!(matches!(err, HotelError::DuplicateRoom(101)));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_remove_room() {
        let mut inventory = RoomInventory::new();
        inventory.add_room(single(101)).unwrap();

        let removed = inventory.remove_room(101).unwrap();
        assert_eq!(removed.number, 101);

        let err = inventory.remove_room(101).unwrap_err();
        assert!(matches!(err, HotelError::RoomNotFound(101)));
    }

    #[test]
    fn test_remove_ignores_availability() {
        let mut inventory = RoomInventory::new();
        inventory.add_room(single(101)).unwrap();
        inventory.set_availability(101, false).unwrap();

        // No cross-reference enforcement here; removal succeeds.
        assert!(inventory.remove_room(101).is_ok());
    }

    #[test]
    fn test_set_availability_unknown_room() {
        let mut inventory = RoomInventory::new();
        let err = inventory.set_availability(999, true).unwrap_err();
        assert!(matches!(err, HotelError::RoomNotFound(999)));
    }

    #[test]
    fn test_find_available_rejects_inverted_range() {
        let inventory = RoomInventory::new();
        let err = inventory
            .find_available(date(2024, 1, 4), date(2024, 1, 1), None)
            .unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));

        // Same-day stays are rejected too
        assert!(inventory
            .find_available(date(2024, 1, 1), date(2024, 1, 1), None)
            .is_err());
    }

    #[test]
    fn test_find_available_filters_by_flag_and_category() {
        let mut inventory = RoomInventory::new();
        inventory.add_room(single(101)).unwrap();
        inventory.add_room(single(102)).unwrap();
        inventory.add_room(suite(301)).unwrap();
        inventory.set_availability(102, false).unwrap();

        let all = inventory
            .find_available(date(2024, 1, 1), date(2024, 1, 4), None)
            .unwrap();
        let numbers: Vec<u32> = all.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![101, 301]);

        let suites = inventory
            .find_available(date(2024, 1, 1), date(2024, 1, 4), Some(RoomCategory::Suite))
            .unwrap();
        assert_eq!(suites.len(), 1);
        assert_eq!(suites[0].number, 301);
    }
}
