use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::core::middleware::{admin_auth_middleware, AdminCredentials};
use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
///
/// Submitting is public; listing sits behind the admin credentials.
pub fn routes(service: Arc<ContactService>, admin: AdminCredentials) -> Router {
    let admin_routes = Router::new()
        .route("/api/contacts", get(handlers::list_contacts))
        .route_layer(from_fn_with_state(admin, admin_auth_middleware));

    Router::new()
        .route("/api/contacts", post(handlers::submit_contact))
        .merge(admin_routes)
        .with_state(service)
}
