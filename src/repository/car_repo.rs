use async_trait::async_trait;
use sqlx::PgPool;

use super::{CrudRepository, RepositoryError, RepositoryResult};
use crate::models::{Car, CarInput, Record};

const CAR_COLUMNS: &str = "id, brand, model, year, color";

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Car> for CarRepository {
    async fn list(&self) -> RepositoryResult<Vec<Car>> {
        let query = format!("SELECT {} FROM car ORDER BY id", CAR_COLUMNS);
        let cars = sqlx::query_as::<_, Car>(&query).fetch_all(&self.pool).await?;
        Ok(cars)
    }

    async fn find(&self, id: i32) -> RepositoryResult<Car> {
        let query = format!("SELECT {} FROM car WHERE id = $1", CAR_COLUMNS);
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Car::ENTITY, id))
    }

    async fn create(&self, input: &CarInput) -> RepositoryResult<Car> {
        let query = format!(
            "INSERT INTO car (brand, model, year, color) VALUES ($1, $2, $3, $4) RETURNING {}",
            CAR_COLUMNS
        );
        let car = sqlx::query_as::<_, Car>(&query)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.color)
            .fetch_one(&self.pool)
            .await?;
        Ok(car)
    }

    async fn update(&self, id: i32, input: &CarInput) -> RepositoryResult<Car> {
        let query = format!(
            "UPDATE car SET brand = $1, model = $2, year = $3, color = $4 WHERE id = $5 RETURNING {}",
            CAR_COLUMNS
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.color)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Car::ENTITY, id))
    }

    async fn remove(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM car WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Car::ENTITY, id));
        }
        Ok(())
    }
}
