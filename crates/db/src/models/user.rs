//! User record.

use marketplace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::record::{Record, SqliteQuery};

/// A row from the `users` table. Serializes as one flat JSON object.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: UserFields,
}

/// Every user column except `id`. Also the PUT payload.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl Record for User {
    type Fields = UserFields;

    const TABLE: &'static str = "users";
    const ENTITY: &'static str = "User";
    const FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "age", "email", "role", "phone"];

    fn id(&self) -> DbId {
        self.id
    }

    fn fields(&self) -> &UserFields {
        &self.fields
    }

    fn bind_fields<'q>(fields: &'q UserFields, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(fields.age)
            .bind(&fields.email)
            .bind(&fields.role)
            .bind(&fields.phone)
    }
}
