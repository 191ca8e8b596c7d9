use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CrudRepository, RepositoryError, RepositoryResult};
use crate::models::{Car, Customer, Record, SalesOrder};

/// Process-local storage for all three tables.
///
/// Follows the Postgres schema: ids are sequential from 1 and never reused,
/// sales orders must reference an existing car and customer, and removing a
/// car or customer removes its sales orders.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository<R: MemoryRecord>(&self) -> InMemoryRepository<R> {
        InMemoryRepository {
            tables: self.tables.clone(),
            _record: PhantomData,
        }
    }
}

#[derive(Default)]
pub struct Tables {
    customers: Table<Customer>,
    cars: Table<Car>,
    sales_orders: Table<SalesOrder>,
}

pub struct Table<R> {
    rows: BTreeMap<i32, R>,
    // i64 so the counter itself cannot overflow before the i32 check.
    next_id: i64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> Table<R> {
    fn allocate_id(&mut self) -> RepositoryResult<i32> {
        let id = i32::try_from(self.next_id)
            .map_err(|_| RepositoryError::IdsExhausted { entity: R::ENTITY })?;
        self.next_id += 1;
        Ok(id)
    }
}

/// Binds a record type to its table and its referential rules.
pub trait MemoryRecord: Record {
    fn table(tables: &Tables) -> &Table<Self>;

    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    fn check_references(_tables: &Tables, _input: &Self::Input) -> RepositoryResult<()> {
        Ok(())
    }

    /// Drops rows of other tables that point at removed row `id`.
    fn cascade(_tables: &mut Tables, _id: i32) {}
}

impl MemoryRecord for Customer {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.customers
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.customers
    }

    fn cascade(tables: &mut Tables, id: i32) {
        tables.sales_orders.rows.retain(|_, order| order.customer_id != id);
    }
}

impl MemoryRecord for Car {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.cars
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.cars
    }

    fn cascade(tables: &mut Tables, id: i32) {
        tables.sales_orders.rows.retain(|_, order| order.car_id != id);
    }
}

impl MemoryRecord for SalesOrder {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.sales_orders
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.sales_orders
    }

    fn check_references(tables: &Tables, input: &Self::Input) -> RepositoryResult<()> {
        if !tables.cars.rows.contains_key(&input.car_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "{} with id {} does not exist",
                Car::ENTITY,
                input.car_id
            )));
        }
        if !tables.customers.rows.contains_key(&input.customer_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "{} with id {} does not exist",
                Customer::ENTITY,
                input.customer_id
            )));
        }
        Ok(())
    }
}

/// View of one table inside an [`InMemoryStore`].
pub struct InMemoryRepository<R> {
    tables: Arc<RwLock<Tables>>,
    _record: PhantomData<fn() -> R>,
}

fn validate<R: Record>(input: &R::Input) -> RepositoryResult<()> {
    R::validate(input).map_err(|reason| RepositoryError::invalid_input(R::ENTITY, reason))
}

#[async_trait]
impl<R: MemoryRecord> CrudRepository<R> for InMemoryRepository<R> {
    async fn list(&self) -> RepositoryResult<Vec<R>> {
        let tables = self.tables.read().await;
        Ok(R::table(&tables).rows.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> RepositoryResult<R> {
        let tables = self.tables.read().await;
        R::table(&tables)
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(R::ENTITY, id))
    }

    async fn create(&self, input: &R::Input) -> RepositoryResult<R> {
        validate::<R>(input)?;

        let mut guard = self.tables.write().await;
        let tables = &mut *guard;
        R::check_references(tables, input)?;

        let table = R::table_mut(tables);
        let id = table.allocate_id()?;
        let record = R::from_input(id, input);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, input: &R::Input) -> RepositoryResult<R> {
        validate::<R>(input)?;

        let mut guard = self.tables.write().await;
        let tables = &mut *guard;
        if !R::table(tables).rows.contains_key(&id) {
            return Err(RepositoryError::not_found(R::ENTITY, id));
        }
        R::check_references(tables, input)?;

        let record = R::from_input(id, input);
        R::table_mut(tables).rows.insert(id, record.clone());
        Ok(record)
    }

    async fn remove(&self, id: i32) -> RepositoryResult<()> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;
        R::table_mut(tables)
            .rows
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found(R::ENTITY, id))?;

        R::cascade(tables, id);
        Ok(())
    }
}
