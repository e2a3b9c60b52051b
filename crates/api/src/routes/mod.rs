pub mod health;
pub mod records;
pub mod root;

use axum::Router;
use marketplace_db::models::{Offer, Order, User};

use crate::state::AppState;

/// Build the record route tree.
///
/// Paths are trailing-slash sensitive.
///
/// ```text
/// /                      greeting
///
/// /users/                list, create
/// /users/{id}/           get, update, delete
///
/// /orders/               list, create
/// /orders/{id}/          get, update, delete
///
/// /offers/               list, create
/// /offers/{id}/          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(records::router::<User>())
        .merge(records::router::<Order>())
        .merge(records::router::<Offer>())
}
