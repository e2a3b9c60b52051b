//! Startup seeding from static JSON files.
//!
//! Each table is filled from `{dir}/{table}.json`, a JSON array of full
//! records. A table is committed once, after all of its rows are inserted.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::models::{Offer, Order, User};
use crate::record::Record;
use crate::repositories::RecordRepo;
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to seed table {table}: {source}")]
    Database {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Read a JSON array file into typed records, preserving file order.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Insert `records` into the table of `R` inside one transaction.
///
/// Nothing is committed if any insert fails.
pub async fn seed_table<R: Record>(pool: &DbPool, records: &[R]) -> Result<usize, SeedError> {
    let db_err = |source: sqlx::Error| SeedError::Database {
        table: R::TABLE,
        source,
    };

    let mut tx = pool.begin().await.map_err(db_err)?;
    for record in records {
        RecordRepo::<R>::create(&mut *tx, record)
            .await
            .map_err(db_err)?;
    }
    tx.commit().await.map_err(db_err)?;

    Ok(records.len())
}

/// Load `{dir}/{table}.json` and seed the table of `R` from it.
pub async fn seed_from_file<R: Record>(pool: &DbPool, dir: &Path) -> Result<usize, SeedError> {
    let path = dir.join(format!("{}.json", R::TABLE));
    let records: Vec<R> = load_records(&path)?;
    let count = seed_table(pool, &records).await?;
    tracing::info!(table = R::TABLE, count, path = %path.display(), "Seeded table");
    Ok(count)
}

/// Seed users, orders and offers, in that order, from `dir`.
pub async fn seed_all(pool: &DbPool, dir: &Path) -> Result<(), SeedError> {
    seed_from_file::<User>(pool, dir).await?;
    seed_from_file::<Order>(pool, dir).await?;
    seed_from_file::<Offer>(pool, dir).await?;
    Ok(())
}
