//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for users, sessions, and statements
//! - Authentication middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use finapi_core::statement::{LedgerStore, StatementService};
use finapi_core::users::{UserDirectory, UserService};
use finapi_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deposits, withdrawals, balance and statement queries.
    pub statements: Arc<StatementService>,
    /// Registration, authentication, profile.
    pub users: Arc<UserService>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Wires both services over one user directory and a ledger store.
    #[must_use]
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn LedgerStore>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            statements: Arc::new(StatementService::new(Arc::clone(&directory), ledger)),
            users: Arc::new(UserService::new(directory)),
            jwt_service: Arc::new(jwt_service),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
