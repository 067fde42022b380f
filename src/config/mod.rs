//! Configuration loading for the booking server.
//!
//! This module loads the server settings and the seed inventory (rooms,
//! customers and any pre-existing bookings) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hotel_booking::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hotel").unwrap();
//! println!("Serving {} rooms", config.rooms().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BookingsConfig, CustomersConfig, HotelConfig, RoomsConfig, ServerConfig};
