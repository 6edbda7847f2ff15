//! Current admin session.

use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::api::response::DataResponse;
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::auth::{AdminSessionResponse, SupabaseUser, User};
use crate::error::ApiError;
use crate::services::BackendError;

/// Banner shown to operators signed in with an address outside `domain`.
pub fn domain_notice(auth: &RequireAuth, domain: Option<&str>) -> Option<String> {
    let domain = domain?;
    if auth.email_in_domain(domain) {
        return None;
    }
    Some(format!(
        "You are signed in with an address outside @{}. Content changes are still saved, \
         but please use your company account.",
        domain
    ))
}

/// GET /admin/session
///
/// The domain restriction is advisory: an outside address gets a notice, not a denial.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let backend_user: SupabaseUser = state
        .backend
        .with_token(auth.token())
        .auth_user()
        .await
        .map_err(|e| match e {
            BackendError::Status { status, .. } if status.is_client_error() => {
                ApiError::unauthorized("Invalid session")
            }
            other => other.into(),
        })?;

    let notice = domain_notice(&auth, state.settings.admin_email_domain.as_deref());
    if notice.is_some() {
        tracing::warn!(user_id = %auth.user_id, email = ?auth.email, "Operator outside admin email domain");
    }

    let user: User = backend_user.into();
    Ok(DataResponse::new(AdminSessionResponse {
        user,
        expires_at: auth.claims().exp,
        domain_notice: notice,
    }))
}
