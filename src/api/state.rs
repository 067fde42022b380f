//! Application state for the booking API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::ConfigLoader;
use crate::error::BookingResult;
use crate::models::{Booking, Customer, Room};
use crate::service::BookingManager;
use crate::store::{InMemoryRepository, Repository};

/// Shared application state.
///
/// Holds one repository per entity kind and the booking manager built on
/// top of the room and booking repositories.
#[derive(Clone)]
pub struct AppState {
    rooms: Arc<dyn Repository<Room>>,
    customers: Arc<dyn Repository<Customer>>,
    bookings: Arc<dyn Repository<Booking>>,
    manager: Arc<BookingManager>,
}

impl AppState {
    /// Creates a new application state over the given repositories.
    pub fn new(
        rooms: Arc<dyn Repository<Room>>,
        customers: Arc<dyn Repository<Customer>>,
        bookings: Arc<dyn Repository<Booking>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let manager = BookingManager::new(Arc::clone(&bookings), Arc::clone(&rooms), clock);
        Self {
            rooms,
            customers,
            bookings,
            manager: Arc::new(manager),
        }
    }

    /// Creates in-memory repositories seeded from the loaded configuration.
    pub fn from_config(config: &ConfigLoader, clock: Arc<dyn Clock>) -> BookingResult<Self> {
        let rooms = InMemoryRepository::with_records(config.rooms().to_vec())?;
        let customers = InMemoryRepository::with_records(config.customers().to_vec())?;
        let bookings = InMemoryRepository::with_records(config.bookings().to_vec())?;
        Ok(Self::new(
            Arc::new(rooms),
            Arc::new(customers),
            Arc::new(bookings),
            clock,
        ))
    }

    /// Returns the room repository.
    pub fn rooms(&self) -> &dyn Repository<Room> {
        self.rooms.as_ref()
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> &dyn Repository<Customer> {
        self.customers.as_ref()
    }

    /// Returns the booking repository.
    pub fn bookings(&self) -> &dyn Repository<Booking> {
        self.bookings.as_ref()
    }

    /// Returns the booking manager.
    pub fn manager(&self) -> &BookingManager {
        &self.manager
    }
}
