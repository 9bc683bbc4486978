use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    auth::require_auth,
    handlers::{
        auth::{login, signup},
        events::{create_event, delete_event, get_event, update_event},
    },
    AppState,
};

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/event", post(create_event))
        .route(
            "/event/:name",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .nest("/api/v1", protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
