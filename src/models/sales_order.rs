use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::date::deserialize_order_date;
use super::money::{check_order_value, deserialize_order_value, ORDER_VALUE_SCALE};
use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: i32,
    pub car_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderInput {
    pub car_id: i32,
    pub customer_id: i32,
    #[serde(deserialize_with = "deserialize_order_date")]
    pub order_date: NaiveDate,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_order_value"
    )]
    pub order_value: Decimal,
}

impl Record for SalesOrder {
    type Input = SalesOrderInput;

    const ENTITY: &'static str = "sales order";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_input(id: i32, input: &SalesOrderInput) -> Self {
        let mut order_value = input.order_value;
        order_value.rescale(ORDER_VALUE_SCALE);

        Self {
            id,
            car_id: input.car_id,
            customer_id: input.customer_id,
            order_date: input.order_date,
            order_value,
        }
    }

    fn validate(input: &SalesOrderInput) -> Result<(), String> {
        check_order_value(input.order_value).map(|_| ())
    }
}
