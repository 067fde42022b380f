//! Customer model.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A hotel customer. Bookings refer to customers by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer.
    #[serde(default)]
    pub id: i64,
    /// The customer's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl Customer {
    /// Creates a customer with the given id, name and email.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for Customer {
    const KIND: &'static str = "customer";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
