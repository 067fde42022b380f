//! Closed date-interval overlap.

use chrono::NaiveDate;

/// Returns `true` if the closed intervals `[a_start, a_end]` and
/// `[b_start, b_end]` share at least one calendar date.
///
/// Shared endpoints count: a stay ending on day X overlaps one starting on
/// day X.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::ranges_overlap;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 5, day).unwrap();
/// assert!(ranges_overlap(d(1), d(3), d(3), d(5)));
/// assert!(!ranges_overlap(d(1), d(3), d(4), d(5)));
/// ```
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}
