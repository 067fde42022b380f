//! Configuration types for the booking server.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Booking, Customer, Room};

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g. "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rooms file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsConfig {
    /// The hotel's rooms, in the order the engine tries them.
    pub rooms: Vec<Room>,
}

/// Customers file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomersConfig {
    /// Known customers.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Bookings file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingsConfig {
    /// Bookings present when the server starts.
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// The complete hotel configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct HotelConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Seed rooms.
    pub rooms: Vec<Room>,
    /// Seed customers.
    pub customers: Vec<Customer>,
    /// Seed bookings.
    pub bookings: Vec<Booking>,
}
