//! Role-based authorization guards.
//!
//! Guards extract the authenticated user from request extensions and verify
//! the required role, rejecting with 403 otherwise. Challenges are
//! admin-defined, so their authoring endpoints sit behind [`RequireAdmin`].

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is an admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_test_user, with_auth};
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn admin_only(RequireAdmin(user): RequireAdmin) -> String {
        user.sub
    }

    fn router() -> Router {
        Router::new().route("/admin-only", get(admin_only))
    }

    #[tokio::test]
    async fn test_admin_passes_guard() {
        let server = TestServer::new(with_auth(router(), create_admin_user())).unwrap();

        let response = server.get("/admin-only").await;
        response.assert_status_ok();
        response.assert_text("test-admin");
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let server = TestServer::new(with_auth(router(), create_test_user())).unwrap();

        let response = server.get("/admin-only").await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unauthenticated_request_is_rejected() {
        let server = TestServer::new(router()).unwrap();

        let response = server.get("/admin-only").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
