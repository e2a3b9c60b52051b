//! Order record.

use marketplace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::record::{Record, SqliteQuery};

/// A row from the `orders` table.
///
/// `customer_id` and `executor_id` name users; the reference is not checked.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: DbId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: OrderFields,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct OrderFields {
    pub name: String,
    pub description: String,
    /// Stored verbatim, e.g. `"02/08/2013"`.
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: f64,
    pub customer_id: DbId,
    pub executor_id: DbId,
}

impl Record for Order {
    type Fields = OrderFields;

    const TABLE: &'static str = "orders";
    const ENTITY: &'static str = "Order";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "start_date",
        "end_date",
        "address",
        "price",
        "customer_id",
        "executor_id",
    ];

    fn id(&self) -> DbId {
        self.id
    }

    fn fields(&self) -> &OrderFields {
        &self.fields
    }

    fn bind_fields<'q>(fields: &'q OrderFields, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.start_date)
            .bind(&fields.end_date)
            .bind(&fields.address)
            .bind(fields.price)
            .bind(fields.customer_id)
            .bind(fields.executor_id)
    }
}
