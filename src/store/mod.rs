//! Record storage for rooms, customers and bookings.
//!
//! The [`Repository`] trait is the store contract the booking manager and
//! the HTTP handlers depend on. [`InMemoryRepository`] is the implementation
//! the server runs with; each entity kind gets its own instance.

mod memory;
mod repository;

pub(crate) use memory::check_ids;
pub use memory::InMemoryRepository;
pub use repository::Repository;
