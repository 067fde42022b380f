//! Hotel Booking Engine
//!
//! This crate provides hotel-room reservations over rooms, customers and
//! bookings. Its core is the room-availability engine in [`availability`],
//! which validates date ranges, picks a free room for a stay and reports the
//! dates on which the hotel is fully occupied, without ever double-booking a
//! room.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;
