//! In-memory mock of the staffly persistence API
//!
//! Implements the employee/service HTTP surface against a HashMap
//! store so the client synchronization layer can be exercised without
//! a real backend. Runs standalone (see `main.rs`) or embedded in
//! integration tests via [`serve`].

pub mod api;
pub mod state;

pub use state::MockState;

/// Serve the mock API on an already-bound listener.
///
/// Tests bind to port 0 and read the local address back before
/// handing the listener over.
pub async fn serve(listener: tokio::net::TcpListener, state: MockState) -> std::io::Result<()> {
    axum::serve(listener, api::build_router(state)).await
}
