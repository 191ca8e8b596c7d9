use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub document: String,
    pub phone: String,
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl Record for Customer {
    type Input = CustomerInput;

    const ENTITY: &'static str = "customer";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_input(id: i32, input: &CustomerInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            document: input.document.clone(),
            phone: input.phone.clone(),
        }
    }
}
