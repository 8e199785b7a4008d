use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::database::Store;

pub mod middleware;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/api/attendance/all",
            get(routes::attendance::all_attendance_handler),
        )
        .layer(axum::middleware::from_fn(middleware::admin::require_admin));

    Router::new()
        .route("/api/members", get(routes::members::list_members_handler))
        .route("/api/seats", get(routes::seats::find_seat_handler))
        .route("/api/attendance", post(routes::attendance::register_handler))
        .route(
            "/api/attendance/latest",
            get(routes::attendance::latest_attendance_handler),
        )
        .route("/api/sheet/sync", post(routes::sheet::sync_handler))
        .merge(admin_routes)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
