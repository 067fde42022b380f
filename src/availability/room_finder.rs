//! First-free-room selection.

use chrono::NaiveDate;
use tracing::debug;

use super::validate_reservation_range;
use crate::error::BookingResult;
use crate::models::{Booking, Room};

/// Finds the first room with no active booking overlapping `[start_date, end_date]`.
///
/// Rooms are tried in the order given. A room is free when none of the
/// active bookings assigned to it overlap the requested range, touching
/// endpoints included.
///
/// # Arguments
///
/// * `rooms` - Room snapshot, in store order
/// * `bookings` - Booking snapshot
/// * `start_date` - First night requested
/// * `end_date` - Last night requested
/// * `today` - The current calendar date
///
/// # Returns
///
/// `Ok(Some(room_id))` for the first free room, `Ok(None)` if every room has
/// a conflicting active booking.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDateRange`] when the range fails
/// reservation-mode validation. No rooms are examined in that case.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::find_available_room;
/// use hotel_booking::models::{Booking, Room};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 5, day).unwrap();
/// let rooms = vec![Room::new(1, "A"), Room::new(2, "B")];
/// let bookings = vec![Booking {
///     id: 1,
///     start_date: d(2),
///     end_date: d(3),
///     is_active: true,
///     customer_id: 1,
///     room_id: 1,
/// }];
///
/// let room = find_available_room(&rooms, &bookings, d(2), d(3), d(1)).unwrap();
/// assert_eq!(room, Some(2));
/// ```
///
/// [`BookingError::InvalidDateRange`]: crate::error::BookingError::InvalidDateRange
pub fn find_available_room(
    rooms: &[Room],
    bookings: &[Booking],
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> BookingResult<Option<i64>> {
    validate_reservation_range(start_date, end_date, today)?;

    let room_id = rooms
        .iter()
        .find(|room| {
            !bookings
                .iter()
                .any(|b| b.room_id == room.id && b.conflicts_with(start_date, end_date))
        })
        .map(|room| room.id);

    debug!(
        %start_date,
        %end_date,
        rooms = rooms.len(),
        bookings = bookings.len(),
        room_id = ?room_id,
        "Searched for available room"
    );

    Ok(room_id)
}
