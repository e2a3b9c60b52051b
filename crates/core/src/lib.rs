//! Shared domain types for the marketplace records service.

pub mod error;
pub mod types;
