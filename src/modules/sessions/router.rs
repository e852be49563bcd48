use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{create_session, delete_session, get_sessions, update_session};

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session).get(get_sessions))
        .route("/{id}", put(update_session).delete(delete_session))
}
