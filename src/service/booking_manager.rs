//! The booking manager.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::availability::{find_available_room, get_fully_occupied_dates};
use crate::clock::Clock;
use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, Room};
use crate::store::Repository;

/// Creates bookings without double-booking a room.
///
/// Every call reads a fresh snapshot of rooms and bookings from the store.
/// Within one manager, the check-then-create sequence of
/// [`create_booking`](Self::create_booking) is serialized so two concurrent
/// requests cannot both claim the same room for overlapping dates.
pub struct BookingManager {
    bookings: Arc<dyn Repository<Booking>>,
    rooms: Arc<dyn Repository<Room>>,
    clock: Arc<dyn Clock>,
    reservation_lock: Mutex<()>,
}

impl BookingManager {
    /// Creates a manager over the given stores and clock.
    pub fn new(
        bookings: Arc<dyn Repository<Booking>>,
        rooms: Arc<dyn Repository<Room>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookings,
            rooms,
            clock,
            reservation_lock: Mutex::new(()),
        }
    }

    /// Returns the id of the first room free over `[start_date, end_date]`.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidDateRange`] if the start is not after today or
    /// falls after the end. Store errors are propagated unchanged.
    pub fn find_available_room(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<Option<i64>> {
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        find_available_room(&rooms, &bookings, start_date, end_date, self.clock.today())
    }

    /// Returns the dates in `[start_date, end_date]` on which every room is booked.
    pub fn get_fully_occupied_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<Vec<NaiveDate>> {
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        get_fully_occupied_dates(&rooms, &bookings, start_date, end_date)
    }

    /// Books a free room for the candidate's date range.
    ///
    /// The candidate's `room_id` is ignored: the engine's pick always wins.
    /// On success the stored booking is active and carries the chosen room.
    ///
    /// # Returns
    ///
    /// `Ok(Some(booking))` with the stored booking, or `Ok(None)` if no room
    /// is free. Nothing is written in the `None` case.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidDateRange`] for unusable ranges, in which case
    /// the store is not touched. Store errors are propagated unchanged.
    pub fn book(&self, candidate: Booking) -> BookingResult<Option<Booking>> {
        let _guard = self
            .reservation_lock
            .lock()
            .map_err(|_| BookingError::StoreUnavailable {
                message: "reservation lock poisoned".to_string(),
            })?;

        let room_id = match self.find_available_room(candidate.start_date, candidate.end_date) {
            Ok(Some(room_id)) => room_id,
            Ok(None) => {
                info!(
                    start_date = %candidate.start_date,
                    end_date = %candidate.end_date,
                    customer_id = candidate.customer_id,
                    "No room available"
                );
                return Ok(None);
            }
            Err(err) => {
                warn!(
                    start_date = %candidate.start_date,
                    end_date = %candidate.end_date,
                    error = %err,
                    "Booking rejected"
                );
                return Err(err);
            }
        };

        let booking = Booking {
            room_id,
            is_active: true,
            ..candidate
        };
        let stored = self.bookings.add(booking)?;
        info!(
            booking_id = stored.id,
            room_id,
            customer_id = stored.customer_id,
            "Booking created"
        );
        Ok(Some(stored))
    }

    /// Books a free room for the candidate, reporting only whether it worked.
    ///
    /// See [`book`](Self::book) for the rules applied.
    pub fn create_booking(&self, candidate: Booking) -> BookingResult<bool> {
        Ok(self.book(candidate)?.is_some())
    }
}
