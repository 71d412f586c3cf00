use crate::handlers::{advice, market, session};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/login", post(session::login))
        .route("/auth/logout", post(session::logout))
        .route("/auth/me", get(session::me))
        .route(
            "/market/items",
            get(market::list_items).post(market::create_item),
        )
        .route(
            "/market/items/{id}",
            put(market::update_item).delete(market::delete_item),
        )
        .route("/market/bulk", post(market::bulk_import))
        .route("/ai/advice", post(advice::generate_advice));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
