//! Route definitions shared by every record collection.

use axum::routing::get;
use axum::Router;
use marketplace_db::record::Record;

use crate::handlers::records;
use crate::state::AppState;

/// Routes for the table of `R`, mounted at `/{table}/`.
///
/// ```text
/// GET    /{table}/          -> list
/// POST   /{table}/          -> create
/// GET    /{table}/{id}/     -> get_by_id
/// PUT    /{table}/{id}/     -> update
/// DELETE /{table}/{id}/     -> delete
/// ```
pub fn router<R: Record>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{}/", R::TABLE),
            get(records::list::<R>).post(records::create::<R>),
        )
        .route(
            &format!("/{}/{{id}}/", R::TABLE),
            get(records::get_by_id::<R>)
                .put(records::update::<R>)
                .delete(records::delete::<R>),
        )
}
