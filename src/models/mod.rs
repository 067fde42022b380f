//! Core data models for the hotel booking engine.
//!
//! This module contains the entities held by the store (rooms, customers
//! and bookings) and the [`Entity`] trait that gives each of them an identity.

mod booking;
mod customer;
mod entity;
mod room;

pub use booking::{Booking, BookingDetails, BookingState};
pub use customer::Customer;
pub use entity::Entity;
pub use room::Room;
