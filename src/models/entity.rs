//! Identity shared by every stored record.

/// A record with an integer identity, stored by a [`Repository`].
///
/// Each model implements this independently; there is no shared base state.
///
/// [`Repository`]: crate::store::Repository
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name of the entity kind, used in errors and logs.
    const KIND: &'static str;

    /// Returns the record's id.
    fn id(&self) -> i64;

    /// Replaces the record's id. Called by the store when assigning ids.
    fn set_id(&mut self, id: i64);
}
