use std::sync::Arc;

use sqlx::PgPool;

use crate::models::{Car, Customer, SalesOrder};
use crate::repository::{
    CarRepository, CrudRepository, CustomerRepository, InMemoryStore, SalesOrderRepository,
};

/// Shared handler state: one repository per resource.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CrudRepository<Customer>>,
    pub cars: Arc<dyn CrudRepository<Car>>,
    pub sales_orders: Arc<dyn CrudRepository<SalesOrder>>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            customers: Arc::new(CustomerRepository::new(pool.clone())),
            cars: Arc::new(CarRepository::new(pool.clone())),
            sales_orders: Arc::new(SalesOrderRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            customers: Arc::new(store.repository::<Customer>()),
            cars: Arc::new(store.repository::<Car>()),
            sales_orders: Arc::new(store.repository::<SalesOrder>()),
        }
    }
}
