use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
}

impl Record for Car {
    type Input = CarInput;

    const ENTITY: &'static str = "car";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_input(id: i32, input: &CarInput) -> Self {
        Self {
            id,
            brand: input.brand.clone(),
            model: input.model.clone(),
            year: input.year,
            color: input.color.clone(),
        }
    }
}
