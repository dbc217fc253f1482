//! Web API module

pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use state::ApiState;

/// Default port for the API server
pub const DEFAULT_PORT: u16 = 8321;

/// Create the API router
pub fn create_api_router() -> Router<ApiState> {
    Router::new()
        // Tasks API
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route("/tasks/{id}", get(handlers::tasks::get_task))
        .route("/tasks/{id}", put(handlers::tasks::update_task))
        .route("/tasks/{id}", delete(handlers::tasks::delete_task))
        // Version API
        .route("/version", get(handlers::version::get_version))
}

/// Create the full router with CORS
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", create_api_router())
        .with_state(state)
        .layer(cors)
}

/// Start the API server
pub async fn start_server(host: &str, port: u16, state: ApiState) -> std::io::Result<()> {
    let app = create_router(state);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("todos API server: http://{}/api/v1", addr);

    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}
