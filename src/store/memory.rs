//! In-memory repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::Repository;
use crate::error::{BookingError, BookingResult};
use crate::models::Entity;

/// A [`Repository`] that keeps records in insertion order behind a lock.
///
/// Ids are assigned on [`add`](Repository::add) as one more than the largest
/// id ever handed out, starting at 1.
///
/// # Example
///
/// ```
/// use hotel_booking::models::Room;
/// use hotel_booking::store::{InMemoryRepository, Repository};
///
/// let rooms = InMemoryRepository::new();
/// let room = rooms.add(Room::new(0, "Sea view")).unwrap();
/// assert_eq!(room.id, 1);
/// assert_eq!(rooms.get(1).unwrap(), Some(room));
/// ```
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    inner: RwLock<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    records: Vec<T>,
    last_id: i64,
}

impl<T> Default for Inner<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Creates a repository holding `records` with their ids as given.
    ///
    /// Fails with [`BookingError::InvalidEntity`] if an id is not positive
    /// or appears twice.
    pub fn with_records(records: Vec<T>) -> BookingResult<Self> {
        let last_id = check_ids(&records).map_err(|message| BookingError::InvalidEntity {
            field: "id".to_string(),
            message,
        })?;

        Ok(Self {
            inner: RwLock::new(Inner { records, last_id }),
        })
    }

    fn read(&self) -> BookingResult<RwLockReadGuard<'_, Inner<T>>> {
        self.inner.read().map_err(|_| BookingError::StoreUnavailable {
            message: format!("{} store lock poisoned", T::KIND),
        })
    }

    fn write(&self) -> BookingResult<RwLockWriteGuard<'_, Inner<T>>> {
        self.inner.write().map_err(|_| BookingError::StoreUnavailable {
            message: format!("{} store lock poisoned", T::KIND),
        })
    }
}

/// Checks that every id is positive and unique, returning the largest.
pub(crate) fn check_ids<T: Entity>(records: &[T]) -> Result<i64, String> {
    let mut last_id = 0;
    for (i, record) in records.iter().enumerate() {
        if record.id() <= 0 {
            return Err(format!("{} id must be positive, got {}", T::KIND, record.id()));
        }
        if records[..i].iter().any(|r| r.id() == record.id()) {
            return Err(format!("duplicate {} id {}", T::KIND, record.id()));
        }
        last_id = last_id.max(record.id());
    }
    Ok(last_id)
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> BookingResult<Vec<T>> {
        Ok(self.read()?.records.clone())
    }

    fn get(&self, id: i64) -> BookingResult<Option<T>> {
        Ok(self.read()?.records.iter().find(|r| r.id() == id).cloned())
    }

    fn add(&self, mut entity: T) -> BookingResult<T> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        entity.set_id(inner.last_id);
        inner.records.push(entity.clone());
        debug!(kind = T::KIND, id = entity.id(), "Record added");
        Ok(entity)
    }

    fn edit(&self, entity: T) -> BookingResult<()> {
        let mut inner = self.write()?;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or(BookingError::NotFound {
                entity: T::KIND,
                id: entity.id(),
            })?;
        *slot = entity;
        Ok(())
    }

    fn remove(&self, id: i64) -> BookingResult<()> {
        let mut inner = self.write()?;
        let index = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(BookingError::NotFound {
                entity: T::KIND,
                id,
            })?;
        inner.records.remove(index);
        debug!(kind = T::KIND, id, "Record removed");
        Ok(())
    }
}
