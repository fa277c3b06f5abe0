use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{
    get_activities, health_check, root, signup_for_activity, unregister_from_activity,
};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/activities", get(get_activities))
        .route("/activities/:activity_name/signup", post(signup_for_activity))
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_from_activity),
        )
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}
