use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / -- plain-text liveness greeting.
async fn greeting() -> &'static str {
    "Hello, I'm working :)"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
