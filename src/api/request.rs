//! Request types for the booking API.
//!
//! This module defines the JSON request structures accepted by the
//! booking, room and customer endpoints, and their conversions into
//! domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, Customer, Room};

/// Request body for `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay.
    pub end_date: NaiveDate,
    /// The customer making the booking.
    pub customer_id: i64,
    /// Preferred room. Advisory only; the engine assigns the room.
    #[serde(default)]
    pub room_id: Option<i64>,
}

/// Request body for `PUT /bookings/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay.
    pub end_date: NaiveDate,
    /// Whether the booking occupies its room.
    pub is_active: bool,
    /// The customer holding the booking.
    pub customer_id: i64,
    /// The room assigned to the booking.
    pub room_id: i64,
}

/// Request body for `POST /rooms` and `PUT /rooms/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Free-text room description.
    pub description: String,
}

/// Request body for `POST /customers` and `PUT /customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// The customer's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

/// Query string for the availability endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeQuery {
    /// Start of the range (inclusive).
    pub start_date: NaiveDate,
    /// End of the range (inclusive).
    pub end_date: NaiveDate,
}

impl From<CreateBookingRequest> for Booking {
    fn from(req: CreateBookingRequest) -> Self {
        Booking {
            id: 0,
            start_date: req.start_date,
            end_date: req.end_date,
            is_active: false,
            customer_id: req.customer_id,
            room_id: req.room_id.unwrap_or_default(),
        }
    }
}

impl UpdateBookingRequest {
    /// Builds the replacement booking for `id`.
    pub fn into_booking(self, id: i64) -> Booking {
        Booking {
            id,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
            customer_id: self.customer_id,
            room_id: self.room_id,
        }
    }
}

impl RoomRequest {
    /// Builds a room with the given id, rejecting a blank description.
    pub fn into_room(self, id: i64) -> BookingResult<Room> {
        if self.description.trim().is_empty() {
            return Err(BookingError::InvalidEntity {
                field: "description".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(Room::new(id, self.description))
    }
}

impl CustomerRequest {
    /// Builds a customer with the given id, rejecting a blank name or an
    /// email without `@`.
    pub fn into_customer(self, id: i64) -> BookingResult<Customer> {
        if self.name.trim().is_empty() {
            return Err(BookingError::InvalidEntity {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !self.email.contains('@') {
            return Err(BookingError::InvalidEntity {
                field: "email".to_string(),
                message: format!("'{}' is not an email address", self.email),
            });
        }
        Ok(Customer::new(id, self.name, self.email))
    }
}
