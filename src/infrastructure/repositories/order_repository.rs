//! Order Repository Implementation
//!
//! SQLite implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::domain::{NewOrder, Order, OrderRepository};
use crate::shared::error::AppError;

/// Database row representation matching the orders table schema.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    apartment_number: i64,
    dog_name: String,
    dog_breed: String,
    walk_time: NaiveDateTime,
    walker: String,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            id: self.id,
            apartment_number: self.apartment_number,
            dog_name: self.dog_name,
            dog_breed: self.dog_breed,
            walk_time: self.walk_time,
            walker: self.walker,
        }
    }
}

/// SQLite order repository implementation.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Create a new SqliteOrderRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn find_by_slot(
        &self,
        walk_time: NaiveDateTime,
        walker: &str,
    ) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, apartment_number, dog_name, dog_breed, walk_time, walker
            FROM orders
            WHERE walk_time = ?1 AND walker = ?2
            LIMIT 1
            "#,
        )
        .bind(walk_time)
        .bind(walker)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_order()))
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (apartment_number, dog_name, dog_breed, walk_time, walker)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, apartment_number, dog_name, dog_breed, walk_time, walker
            "#,
        )
        .bind(order.apartment_number)
        .bind(&order.dog_name)
        .bind(&order.dog_breed)
        .bind(order.walk_time)
        .bind(&order.walker)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_order())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, apartment_number, dog_name, dog_breed, walk_time, walker
            FROM orders
            WHERE date(walk_time) = ?1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_order()).collect())
    }
}
