/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Record store. Handlers open one transaction per request from it.
    pub pool: marketplace_db::DbPool,
}
