pub mod car;
pub mod customer;
pub mod date;
pub mod money;
pub mod sales_order;

use serde::de::DeserializeOwned;

pub use car::{Car, CarInput};
pub use customer::{Customer, CustomerInput};
pub use sales_order::{SalesOrder, SalesOrderInput};

/// A persisted entity: a database-assigned id plus the fields a client sends
/// as its input form.
pub trait Record: Clone + Send + Sync + 'static {
    type Input: Clone + DeserializeOwned + Send + Sync + 'static;

    /// Singular name used in logs and not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> i32;

    fn from_input(id: i32, input: &Self::Input) -> Self;

    /// Rejects input the schema cannot store as given.
    fn validate(_input: &Self::Input) -> Result<(), String> {
        Ok(())
    }
}
