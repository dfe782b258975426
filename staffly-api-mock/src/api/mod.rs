//! Route table and request gate for the mock API

mod employees;
mod services;

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shared::error::AppError;

use crate::state::MockState;

/// Build the full router with auth gate and middleware
pub fn build_router(state: MockState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/employees/{id}",
            get(employees::get_by_id)
                .patch(employees::update)
                .delete(employees::delete)
                .post(services::create),
        )
        .route(
            "/employees/{id}/services/{service_id}",
            get(services::get_by_id)
                .patch(services::update)
                .delete(services::delete),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Require the configured bearer token on every request
///
/// Also injects the artificial latency configured on the state, so
/// cancellation tests get a window to abort in.
async fn require_auth(
    State(state): State<MockState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .is_some_and(|t| t == state.token());

    if !authorized {
        tracing::warn!(uri = %req.uri(), "Rejected unauthenticated request");
        return Err(AppError::Unauthorized);
    }

    if let Some(delay) = state.latency() {
        tokio::time::sleep(delay).await;
    }

    Ok(next.run(req).await)
}
