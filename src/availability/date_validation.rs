//! Date-range validation.
//!
//! Two modes are supported. Reservation mode guards room searches and
//! requires a start date strictly after today. Query mode guards reporting
//! queries and only checks ordering.

use chrono::NaiveDate;

use crate::error::{BookingError, BookingResult};

/// Message returned when a reservation range is rejected.
pub const RESERVATION_RANGE_MESSAGE: &str =
    "The start date cannot be in the past or later than the end date.";

/// Message returned when a query range is rejected.
pub const QUERY_RANGE_MESSAGE: &str = "The start date cannot be later than the end date.";

/// Validates a range that is about to be reserved.
///
/// # Arguments
///
/// * `start_date` - First night of the stay
/// * `end_date` - Last night of the stay
/// * `today` - The current calendar date, supplied by a [`Clock`]
///
/// # Errors
///
/// Returns [`BookingError::InvalidDateRange`] if `start_date` is not
/// strictly after `today`, or if `start_date > end_date`. A start date equal
/// to today is rejected.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::validate_reservation_range;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// let tomorrow = today.succ_opt().unwrap();
///
/// assert!(validate_reservation_range(tomorrow, tomorrow, today).is_ok());
/// assert!(validate_reservation_range(today, tomorrow, today).is_err());
/// ```
///
/// [`Clock`]: crate::clock::Clock
pub fn validate_reservation_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> BookingResult<()> {
    if start_date <= today || start_date > end_date {
        return Err(BookingError::InvalidDateRange {
            message: RESERVATION_RANGE_MESSAGE.to_string(),
        });
    }
    Ok(())
}

/// Validates a range used for reporting. Past dates are allowed.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDateRange`] if `start_date > end_date`.
pub fn validate_query_range(start_date: NaiveDate, end_date: NaiveDate) -> BookingResult<()> {
    if start_date > end_date {
        return Err(BookingError::InvalidDateRange {
            message: QUERY_RANGE_MESSAGE.to_string(),
        });
    }
    Ok(())
}
