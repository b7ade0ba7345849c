//! Session extractors — pull the session cookie, validate the token, and
//! inject the authenticated principal id into handlers.
//!
//! Every rejection collapses to one uniform unauthenticated response; the
//! sub-reason (missing cookie, expired, bad signature, malformed) is only
//! distinguishable in the logs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use toko_auth::jwt::{JwtDecoder, SessionClaims};
use toko_auth::session::SessionCookie;
use toko_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Uniform message for every authentication failure on token-guarded routes.
const UNAUTHENTICATED: &str = "Unauthenticated";

/// An authenticated customer session.
#[derive(Debug, Clone)]
pub struct UserSession {
    /// The principal id asserted by the validated token.
    pub principal_id: i64,
    /// The full decoded claims.
    pub claims: SessionClaims,
}

/// An authenticated administrator session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The principal id asserted by the validated token.
    pub principal_id: i64,
    /// The full decoded claims.
    pub claims: SessionClaims,
}

fn resolve_session(
    carrier: &SessionCookie,
    decoder: &JwtDecoder,
    parts: &Parts,
) -> Result<(i64, SessionClaims), ApiError> {
    let Some(token) = carrier.read(&parts.headers) else {
        tracing::debug!(cookie = carrier.name(), "session cookie absent");
        return Err(AppError::authentication(UNAUTHENTICATED).into());
    };

    let claims = decoder.decode(&token).map_err(|e| {
        tracing::debug!(cookie = carrier.name(), reason = %e, "session token rejected");
        ApiError::from(AppError::authentication(UNAUTHENTICATED))
    })?;

    let principal_id = claims.principal_id().map_err(|e| {
        tracing::debug!(cookie = carrier.name(), reason = %e, "session token rejected");
        ApiError::from(AppError::authentication(UNAUTHENTICATED))
    })?;

    Ok((principal_id, claims))
}

impl FromRequestParts<AppState> for UserSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (principal_id, claims) =
            resolve_session(&state.user_cookie, &state.user_jwt_decoder, parts)?;
        Ok(UserSession {
            principal_id,
            claims,
        })
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (principal_id, claims) =
            resolve_session(&state.admin_cookie, &state.admin_jwt_decoder, parts)?;
        Ok(AdminSession {
            principal_id,
            claims,
        })
    }
}
