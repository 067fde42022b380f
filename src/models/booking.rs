//! Booking model and related types.
//!
//! This module defines the [`Booking`] record, its lifecycle state and the
//! derived [`BookingDetails`] view that resolves a booking's room and
//! customer against the current snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Customer, Entity, Room};
use crate::availability::ranges_overlap;

/// A reservation of one room by one customer over a closed date range.
///
/// The booking refers to its room and customer by id only. Use
/// [`BookingDetails::resolve`] to look them up on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    #[serde(default)]
    pub id: i64,
    /// First night of the stay (inclusive).
    pub start_date: NaiveDate,
    /// Last night of the stay (inclusive).
    pub end_date: NaiveDate,
    /// Inactive bookings do not occupy their room.
    #[serde(default)]
    pub is_active: bool,
    /// The customer holding the booking.
    pub customer_id: i64,
    /// The room assigned to the booking.
    #[serde(default)]
    pub room_id: i64,
}

/// Lifecycle state of a single booking.
///
/// Only [`BookingState::Active`] counts toward overlap and occupancy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// Not yet persisted.
    Pending,
    /// Persisted and occupying its room.
    Active,
    /// Persisted but switched off by an edit.
    Inactive,
    /// Deleted from the store.
    ///
    /// [`Booking::state`] never returns this: a removed booking is no longer
    /// held anywhere to ask. It exists for callers that track a booking
    /// across a delete.
    Removed,
}

impl Booking {
    /// Returns the lifecycle state of a booking that is held by the store.
    ///
    /// A booking with id `0` has never been persisted and is `Pending`.
    ///
    /// # Example
    ///
    /// ```
    /// use hotel_booking::models::{Booking, BookingState};
    /// use chrono::NaiveDate;
    ///
    /// let booking = Booking {
    ///     id: 1,
    ///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
    ///     is_active: true,
    ///     customer_id: 1,
    ///     room_id: 2,
    /// };
    /// assert_eq!(booking.state(), BookingState::Active);
    /// ```
    pub fn state(&self) -> BookingState {
        match (self.id, self.is_active) {
            (0, _) => BookingState::Pending,
            (_, true) => BookingState::Active,
            (_, false) => BookingState::Inactive,
        }
    }

    /// Whether this booking is active and its range overlaps `[start, end]`.
    ///
    /// Touching endpoints count as overlap.
    pub fn conflicts_with(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.is_active && ranges_overlap(self.start_date, self.end_date, start, end)
    }

    /// Whether this booking is active and covers `date`.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.is_active && self.start_date <= date && date <= self.end_date
    }
}

impl Entity for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A booking with its room and customer looked up by id.
///
/// Never stored; either side is `None` when the referenced record has
/// since been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// The booking itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// The booked room, if it still exists.
    pub room: Option<Room>,
    /// The booking customer, if they still exist.
    pub customer: Option<Customer>,
}

impl BookingDetails {
    /// Resolves the booking's room and customer against the given snapshots.
    pub fn resolve(booking: Booking, rooms: &[Room], customers: &[Customer]) -> Self {
        let room = rooms.iter().find(|r| r.id == booking.room_id).cloned();
        let customer = customers
            .iter()
            .find(|c| c.id == booking.customer_id)
            .cloned();
        Self {
            booking,
            room,
            customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_booking(start: &str, end: &str, is_active: bool) -> Booking {
        Booking {
            id: 1,
            start_date: make_date(start),
            end_date: make_date(end),
            is_active,
            customer_id: 1,
            room_id: 1,
        }
    }

    #[test]
    fn test_state_follows_id_and_active_flag() {
        let mut booking = make_booking("2026-03-01", "2026-03-02", true);
        assert_eq!(booking.state(), BookingState::Active);

        booking.is_active = false;
        assert_eq!(booking.state(), BookingState::Inactive);

        booking.id = 0;
        assert_eq!(booking.state(), BookingState::Pending);
    }

    #[test]
    fn test_state_is_never_removed() {
        for id in [0, 1, 42] {
            for is_active in [true, false] {
                let mut booking = make_booking("2026-03-01", "2026-03-02", is_active);
                booking.id = id;
                assert_ne!(booking.state(), BookingState::Removed);
            }
        }
    }

    #[test]
    fn test_conflicts_with_touching_endpoint() {
        let booking = make_booking("2026-03-01", "2026-03-03", true);
        assert!(booking.conflicts_with(make_date("2026-03-03"), make_date("2026-03-05")));
        assert!(!booking.conflicts_with(make_date("2026-03-04"), make_date("2026-03-05")));
    }

    #[test]
    fn test_inactive_booking_never_conflicts_or_occupies() {
        let booking = make_booking("2026-03-01", "2026-03-03", false);
        assert!(!booking.conflicts_with(make_date("2026-03-01"), make_date("2026-03-03")));
        assert!(!booking.occupies(make_date("2026-03-02")));
    }

    #[test]
    fn test_occupies_is_inclusive_at_both_ends() {
        let booking = make_booking("2026-03-01", "2026-03-03", true);
        assert!(booking.occupies(make_date("2026-03-01")));
        assert!(booking.occupies(make_date("2026-03-03")));
        assert!(!booking.occupies(make_date("2026-02-28")));
        assert!(!booking.occupies(make_date("2026-03-04")));
    }

    #[test]
    fn test_resolve_details_with_missing_customer() {
        let booking = make_booking("2026-03-01", "2026-03-03", true);
        let rooms = vec![Room::new(1, "A"), Room::new(2, "B")];

        let details = BookingDetails::resolve(booking, &rooms, &[]);

        assert_eq!(details.room, Some(Room::new(1, "A")));
        assert!(details.customer.is_none());
    }

    #[test]
    fn test_deserialize_booking_defaults() {
        let json = r#"{
            "start_date": "2026-03-01",
            "end_date": "2026-03-03",
            "customer_id": 4
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, 0);
        assert_eq!(booking.room_id, 0);
        assert!(!booking.is_active);
        assert_eq!(booking.state(), BookingState::Pending);
    }
}
