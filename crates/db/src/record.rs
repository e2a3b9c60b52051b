//! The [`Record`] trait ties a row type to its table so that one repository
//! and one set of HTTP handlers can serve every entity.

use marketplace_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

/// An un-executed SQLite statement with its bound arguments.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A flat row with a caller-supplied `id` and a fixed set of other columns.
///
/// The full record (id plus fields) is the create payload; [`Record::Fields`]
/// alone is the update payload.
pub trait Record:
    for<'r> FromRow<'r, SqliteRow> + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// Every column except `id`.
    type Fields: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Table name, also the seed file stem (`{TABLE}.json`).
    const TABLE: &'static str;

    /// Human-readable entity name used in responses and logs.
    const ENTITY: &'static str;

    /// Column names of [`Record::Fields`], in the order `bind_fields` binds them.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> DbId;

    fn fields(&self) -> &Self::Fields;

    /// Bind every field onto `query`, in [`Record::FIELDS`] order.
    fn bind_fields<'q>(fields: &'q Self::Fields, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}
