//! Generic CRUD repository over any [`Record`] table.
//!
//! Every method takes a bare connection so callers decide the transactional
//! scope: pass `&mut *tx` to run inside a transaction, or a pooled connection
//! for a one-off statement.

use std::marker::PhantomData;

use marketplace_core::types::DbId;
use sqlx::SqliteConnection;

use crate::record::Record;

/// Provides list/find/create/update/delete for the table of `R`.
pub struct RecordRepo<R>(PhantomData<R>);

impl<R: Record> RecordRepo<R> {
    /// `id` followed by every field column.
    fn columns() -> String {
        std::iter::once("id")
            .chain(R::FIELDS.iter().copied())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// List every row in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<R>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            Self::columns(),
            R::TABLE
        );
        sqlx::query_as::<_, R>(&query).fetch_all(conn).await
    }

    /// Find a row by id.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<R>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = ?", Self::columns(), R::TABLE);
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a record with its caller-supplied id.
    ///
    /// A taken id surfaces as a unique-violation database error.
    pub async fn create(conn: &mut SqliteConnection, record: &R) -> Result<(), sqlx::Error> {
        let placeholders = vec!["?"; R::FIELDS.len() + 1].join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            R::TABLE,
            Self::columns()
        );
        R::bind_fields(record.fields(), sqlx::query(&query).bind(record.id()))
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Overwrite every field of the row with the given id.
    ///
    /// Returns `false` if no such row exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        fields: &R::Fields,
    ) -> Result<bool, sqlx::Error> {
        let assignments = R::FIELDS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!("UPDATE {} SET {assignments} WHERE id = ?", R::TABLE);
        let result = R::bind_fields(fields, sqlx::query(&query))
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
        let result = sqlx::query(&query).bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
