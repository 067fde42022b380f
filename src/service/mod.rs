//! Booking service.
//!
//! Ties the availability engine to the entity store: it reads room and
//! booking snapshots, asks the engine for a decision and persists the result.

mod booking_manager;

pub use booking_manager::BookingManager;
