//! Order entity and repository trait.
//!
//! Maps to the `orders` table in the database schema.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::shared::error::AppError;

/// A single booked dog walk.
///
/// Maps to the `orders` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - apartment_number: INTEGER NOT NULL
/// - dog_name: TEXT NOT NULL
/// - dog_breed: TEXT NOT NULL
/// - walk_time: DATETIME NOT NULL
/// - walker: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,

    /// Apartment the dog lives in
    pub apartment_number: i64,

    pub dog_name: String,

    pub dog_breed: String,

    /// Start of the walk, local wall-clock time
    pub walk_time: NaiveDateTime,

    /// Name of the assigned walker
    pub walker: String,
}

/// An order that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub apartment_number: i64,
    pub dog_name: String,
    pub dog_breed: String,
    pub walk_time: NaiveDateTime,
    pub walker: String,
}

impl NewOrder {
    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i64) -> Order {
        Order {
            id,
            apartment_number: self.apartment_number,
            dog_name: self.dog_name,
            dog_breed: self.dog_breed,
            walk_time: self.walk_time,
            walker: self.walker,
        }
    }
}

/// Repository trait for Order data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order booked for this walker at exactly this time.
    async fn find_by_slot(
        &self,
        walk_time: NaiveDateTime,
        walker: &str,
    ) -> Result<Option<Order>, AppError>;

    /// Persist a new order and return it with its assigned id.
    async fn create(&self, order: &NewOrder) -> Result<Order, AppError>;

    /// All orders whose walk falls on `date`, in insertion order.
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Order>, AppError>;
}
