use async_trait::async_trait;
use sqlx::PgPool;

use super::{CrudRepository, RepositoryError, RepositoryResult};
use crate::models::{Record, SalesOrder, SalesOrderInput};

const ORDER_COLUMNS: &str = "id, car_id, customer_id, order_date, order_value";

#[derive(Clone)]
pub struct SalesOrderRepository {
    pool: PgPool,
}

impl SalesOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// NUMERIC(12, 2) would round or overflow instead of refusing.
fn validate(input: &SalesOrderInput) -> RepositoryResult<()> {
    SalesOrder::validate(input)
        .map_err(|reason| RepositoryError::invalid_input(SalesOrder::ENTITY, reason))
}

#[async_trait]
impl CrudRepository<SalesOrder> for SalesOrderRepository {
    async fn list(&self) -> RepositoryResult<Vec<SalesOrder>> {
        let query = format!("SELECT {} FROM sales_order ORDER BY id", ORDER_COLUMNS);
        let orders = sqlx::query_as::<_, SalesOrder>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    async fn find(&self, id: i32) -> RepositoryResult<SalesOrder> {
        let query = format!("SELECT {} FROM sales_order WHERE id = $1", ORDER_COLUMNS);
        sqlx::query_as::<_, SalesOrder>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(SalesOrder::ENTITY, id))
    }

    async fn create(&self, input: &SalesOrderInput) -> RepositoryResult<SalesOrder> {
        validate(input)?;
        let query = format!(
            "INSERT INTO sales_order (car_id, customer_id, order_date, order_value)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            ORDER_COLUMNS
        );
        let order = sqlx::query_as::<_, SalesOrder>(&query)
            .bind(input.car_id)
            .bind(input.customer_id)
            .bind(input.order_date)
            .bind(input.order_value)
            .fetch_one(&self.pool)
            .await?;
        Ok(order)
    }

    async fn update(&self, id: i32, input: &SalesOrderInput) -> RepositoryResult<SalesOrder> {
        validate(input)?;
        let query = format!(
            "UPDATE sales_order
             SET car_id = $1, customer_id = $2, order_date = $3, order_value = $4
             WHERE id = $5
             RETURNING {}",
            ORDER_COLUMNS
        );
        sqlx::query_as::<_, SalesOrder>(&query)
            .bind(input.car_id)
            .bind(input.customer_id)
            .bind(input.order_date)
            .bind(input.order_value)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(SalesOrder::ENTITY, id))
    }

    async fn remove(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM sales_order WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(SalesOrder::ENTITY, id));
        }
        Ok(())
    }
}
