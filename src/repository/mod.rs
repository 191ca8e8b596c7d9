//! Data access for customers, cars and sales orders.
//!
//! Every repository implements [`CrudRepository`] so handlers only ever see
//! `Arc<dyn CrudRepository<R>>`. The Postgres implementations bind every
//! value as a query parameter; [`InMemoryStore`] backs tests and the
//! `memory` storage backend with the same referential rules as the schema.

pub mod car_repo;
pub mod customer_repo;
pub mod errors;
pub mod memory;
pub mod sales_order_repo;

use async_trait::async_trait;

use crate::models::Record;

pub use car_repo::CarRepository;
pub use customer_repo::CustomerRepository;
pub use errors::RepositoryError;
pub use memory::{InMemoryRepository, InMemoryStore, MemoryRecord};
pub use sales_order_repo::SalesOrderRepository;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait CrudRepository<R: Record>: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> RepositoryResult<Vec<R>>;

    async fn find(&self, id: i32) -> RepositoryResult<R>;

    /// Inserts a new row and returns it with its assigned id.
    async fn create(&self, input: &R::Input) -> RepositoryResult<R>;

    /// Replaces every mutable field of row `id`.
    async fn update(&self, id: i32, input: &R::Input) -> RepositoryResult<R>;

    async fn remove(&self, id: i32) -> RepositoryResult<()>;
}
