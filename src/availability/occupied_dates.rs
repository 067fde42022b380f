//! Enumeration of fully occupied dates.

use chrono::NaiveDate;
use tracing::debug;

use super::validate_query_range;
use crate::error::BookingResult;
use crate::models::{Booking, Room};

/// Lists every date in `[start_date, end_date]` on which all rooms are taken.
///
/// A date is fully occupied when each room in `rooms` has at least one
/// active booking covering it. The scan is a plain
/// days × rooms × bookings loop.
///
/// With an empty room list every date in the range is fully occupied,
/// matching [`find_available_room`](super::find_available_room) finding no
/// free room.
///
/// # Returns
///
/// The fully occupied dates in ascending order. May be empty.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDateRange`] when `start_date > end_date`.
/// Ranges in the past are accepted.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::get_fully_occupied_dates;
/// use hotel_booking::models::{Booking, Room};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 5, day).unwrap();
/// let rooms = vec![Room::new(1, "A")];
/// let bookings = vec![Booking {
///     id: 1,
///     start_date: d(2),
///     end_date: d(3),
///     is_active: true,
///     customer_id: 1,
///     room_id: 1,
/// }];
///
/// let dates = get_fully_occupied_dates(&rooms, &bookings, d(1), d(4)).unwrap();
/// assert_eq!(dates, vec![d(2), d(3)]);
/// ```
///
/// [`BookingError::InvalidDateRange`]: crate::error::BookingError::InvalidDateRange
pub fn get_fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> BookingResult<Vec<NaiveDate>> {
    validate_query_range(start_date, end_date)?;

    let occupied: Vec<NaiveDate> = start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .filter(|date| {
            rooms.iter().all(|room| {
                bookings
                    .iter()
                    .any(|b| b.room_id == room.id && b.occupies(*date))
            })
        })
        .collect();

    debug!(
        %start_date,
        %end_date,
        occupied = occupied.len(),
        "Computed fully occupied dates"
    );

    Ok(occupied)
}
