//! Repository layer.

pub mod record_repo;

pub use record_repo::RecordRepo;
