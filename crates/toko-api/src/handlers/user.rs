//! Customer auth handlers — register, login, profile, logout.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use toko_core::error::AppError;
use toko_entity::user::{NewUser, User};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse, ProfileResponse, RegisterResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, UserSession};
use crate::state::AppState;
use crate::validation::{valid_email, valid_phone};

/// POST /user/register
///
/// Checks run in a fixed order: emptiness, email format, duplicate email,
/// phone format. The duplicate check deliberately precedes phone validation;
/// that ordering is part of the observed contract.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.has_empty_field() {
        return Err(AppError::validation("All fields are required").into());
    }

    if !valid_email(&req.email) {
        return Err(AppError::validation("Email format is invalid").into());
    }

    if state.user_store.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("Email is already registered").into());
    }

    if !valid_phone(&req.phone_no) {
        return Err(AppError::validation("Phone number format is invalid").into());
    }

    let password_hash = state.password_hasher.hash(&req.password)?;

    let user = state
        .user_store
        .create(&NewUser {
            name: req.name,
            username: req.username,
            email: req.email,
            phone: req.phone_no,
            password_hash,
        })
        .await?;

    tracing::info!(email = %user.email, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            email: user.email,
        }),
    ))
}

/// POST /user/login
///
/// The token travels on two channels: the `jwtUser` cookie and the response
/// body. An unknown email is a plain lookup miss (404); a wrong password is
/// an authentication failure (401). Only the email and the outcome are
/// logged — never the password or the stored digest.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(user) = state.user_store.find_by_email(&req.email).await? else {
        tracing::info!(email = %req.email, "login failed: unknown email");
        return Err(AppError::not_found("User not found").into());
    };

    if !state.password_hasher.verify(&req.password, &user.password_hash) {
        tracing::info!(email = %req.email, "login failed: wrong password");
        return Err(AppError::authentication("Incorrect password").into());
    }

    let (token, _expires_at) = state.user_jwt_encoder.issue(user.id)?;
    let cookie = state.user_cookie.attach(&token)?;

    tracing::info!(email = %user.email, "login successful");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            token,
        }),
    ))
}

/// GET /user/profile
///
/// Returns the stored record wholesale, password digest included. Clients
/// depend on the full field set, so the serialization is left untouched.
pub async fn profile(
    State(state): State<AppState>,
    session: UserSession,
) -> Result<Json<ProfileResponse<User>>, ApiError> {
    let user = state
        .user_store
        .find_by_id(session.principal_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        status: "success".to_string(),
        data: user,
    }))
}

/// POST /user/logout
///
/// Always succeeds, logged in or not. Clears the carrier cookie only; the
/// underlying token stays valid until its natural expiry.
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cookie = state.user_cookie.detach()?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    ))
}
