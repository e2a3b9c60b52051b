//! Offer record: an executor bidding on an order.

use marketplace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::record::{Record, SqliteQuery};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Offer {
    pub id: DbId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: OfferFields,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct OfferFields {
    /// Declared against `users.id` in the schema, not `orders.id`.
    pub order_id: DbId,
    pub executor_id: DbId,
}

impl Record for Offer {
    type Fields = OfferFields;

    const TABLE: &'static str = "offers";
    const ENTITY: &'static str = "Offer";
    const FIELDS: &'static [&'static str] = &["order_id", "executor_id"];

    fn id(&self) -> DbId {
        self.id
    }

    fn fields(&self) -> &OfferFields {
        &self.fields
    }

    fn bind_fields<'q>(fields: &'q OfferFields, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(fields.order_id).bind(fields.executor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_object() {
        let offer = Offer {
            id: 5,
            fields: OfferFields {
                order_id: 2,
                executor_id: 3,
            },
        };
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 5, "order_id": 2, "executor_id": 3})
        );
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let err = serde_json::from_str::<Offer>(r#"{"id": 5, "order_id": 2}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `executor_id`"));
    }
}
