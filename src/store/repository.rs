//! The generic store contract.

use crate::error::BookingResult;
use crate::models::Entity;

/// Storage for one entity kind.
///
/// Implementations must be safe to share across request handlers.
pub trait Repository<T: Entity>: Send + Sync {
    /// Returns a snapshot of every stored record, in store order.
    fn get_all(&self) -> BookingResult<Vec<T>>;

    /// Looks up a record by id.
    fn get(&self, id: i64) -> BookingResult<Option<T>>;

    /// Stores a new record and returns it with its assigned id.
    fn add(&self, entity: T) -> BookingResult<T>;

    /// Replaces the stored record with the same id.
    ///
    /// Fails with [`BookingError::NotFound`] if no such record exists.
    ///
    /// [`BookingError::NotFound`]: crate::error::BookingError::NotFound
    fn edit(&self, entity: T) -> BookingResult<()>;

    /// Deletes the record with the given id.
    ///
    /// Fails with [`BookingError::NotFound`] if no such record exists.
    ///
    /// [`BookingError::NotFound`]: crate::error::BookingError::NotFound
    fn remove(&self, id: i64) -> BookingResult<()>;
}
