//! Administrator auth handlers.
//!
//! Same four flows as the customer side, against the admin store, the
//! `jwtAdmin` cookie, and the admin signing secret. Admin accounts have no
//! phone field, so registration skips that check.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use toko_core::error::AppError;
use toko_entity::admin::{Admin, NewAdmin};

use crate::dto::request::{AdminRegisterRequest, LoginRequest};
use crate::dto::response::{LoginResponse, MessageResponse, ProfileResponse, RegisterResponse};
use crate::error::ApiError;
use crate::extractors::{AdminSession, ApiJson};
use crate::state::AppState;
use crate::validation::valid_email;

/// POST /admin/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AdminRegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.has_empty_field() {
        return Err(AppError::validation("All fields are required").into());
    }

    if !valid_email(&req.email) {
        return Err(AppError::validation("Email format is invalid").into());
    }

    if state.admin_store.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("Email is already registered").into());
    }

    let password_hash = state.password_hasher.hash(&req.password)?;

    let admin = state
        .admin_store
        .create(&NewAdmin {
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await?;

    tracing::info!(email = %admin.email, "admin registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            email: admin.email,
        }),
    ))
}

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(admin) = state.admin_store.find_by_email(&req.email).await? else {
        tracing::info!(email = %req.email, "admin login failed: unknown email");
        return Err(AppError::not_found("Admin not found").into());
    };

    if !state
        .password_hasher
        .verify(&req.password, &admin.password_hash)
    {
        tracing::info!(email = %req.email, "admin login failed: wrong password");
        return Err(AppError::authentication("Incorrect password").into());
    }

    let (token, _expires_at) = state.admin_jwt_encoder.issue(admin.id)?;
    let cookie = state.admin_cookie.attach(&token)?;

    tracing::info!(email = %admin.email, "admin login successful");

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

/// GET /admin/profile
pub async fn profile(
    State(state): State<AppState>,
    session: AdminSession,
) -> Result<Json<ProfileResponse<Admin>>, ApiError> {
    let admin = state
        .admin_store
        .find_by_id(session.principal_id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin not found"))?;

    Ok(Json(ProfileResponse {
        status: "success".to_string(),
        data: admin,
    }))
}

/// POST /admin/logout
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cookie = state.admin_cookie.detach()?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    ))
}
