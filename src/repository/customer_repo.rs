use async_trait::async_trait;
use sqlx::PgPool;

use super::{CrudRepository, RepositoryError, RepositoryResult};
use crate::models::{Customer, CustomerInput, Record};

const CUSTOMER_COLUMNS: &str = "id, name, document, phone";

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Customer> for CustomerRepository {
    async fn list(&self) -> RepositoryResult<Vec<Customer>> {
        let query = format!("SELECT {} FROM customer ORDER BY id", CUSTOMER_COLUMNS);
        let customers = sqlx::query_as::<_, Customer>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(customers)
    }

    async fn find(&self, id: i32) -> RepositoryResult<Customer> {
        let query = format!("SELECT {} FROM customer WHERE id = $1", CUSTOMER_COLUMNS);
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Customer::ENTITY, id))
    }

    async fn create(&self, input: &CustomerInput) -> RepositoryResult<Customer> {
        let query = format!(
            "INSERT INTO customer (name, document, phone) VALUES ($1, $2, $3) RETURNING {}",
            CUSTOMER_COLUMNS
        );
        let customer = sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.document)
            .bind(&input.phone)
            .fetch_one(&self.pool)
            .await?;
        Ok(customer)
    }

    async fn update(&self, id: i32, input: &CustomerInput) -> RepositoryResult<Customer> {
        let query = format!(
            "UPDATE customer SET name = $1, document = $2, phone = $3 WHERE id = $4 RETURNING {}",
            CUSTOMER_COLUMNS
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.document)
            .bind(&input.phone)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Customer::ENTITY, id))
    }

    async fn remove(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Customer::ENTITY, id));
        }
        Ok(())
    }
}
