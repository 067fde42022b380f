//! The room-availability engine.
//!
//! This module contains the pure decision logic of the booking system:
//! date-range validation in reservation and query modes, closed-interval
//! overlap detection, first-free-room selection and enumeration of dates on
//! which every room is taken.
//!
//! Every function here works on snapshots passed in by the caller and holds
//! no state of its own.

mod date_validation;
mod occupied_dates;
mod overlap;
mod room_finder;

pub use date_validation::{
    QUERY_RANGE_MESSAGE, RESERVATION_RANGE_MESSAGE, validate_query_range,
    validate_reservation_range,
};
pub use occupied_dates::get_fully_occupied_dates;
pub use overlap::ranges_overlap;
pub use room_finder::find_available_room;
