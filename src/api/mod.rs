//! HTTP API module for the hotel booking service.
//!
//! This module provides the REST endpoints for bookings, rooms and
//! customers, plus the availability queries backed by the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateBookingRequest, CustomerRequest, DateRangeQuery, RoomRequest, UpdateBookingRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
