//! Application state shared across all handlers.

use std::sync::Arc;

use toko_auth::jwt::{self, JwtDecoder, JwtEncoder};
use toko_auth::password::PasswordHasher;
use toko_auth::session::SessionCookie;
use toko_core::config::AppConfig;
use toko_core::traits::PrincipalStore;
use toko_entity::admin::{Admin, NewAdmin};
use toko_entity::user::{NewUser, User};

/// Cookie carrying the customer session token.
pub const USER_COOKIE: &str = "jwtUser";

/// Cookie carrying the administrator session token.
pub const ADMIN_COOKIE: &str = "jwtAdmin";

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks. The stores are consumed
/// through the `PrincipalStore` contract, so the HTTP layer never knows
/// which persistence engine backs them.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Customer account store.
    pub user_store: Arc<dyn PrincipalStore<User, NewUser>>,
    /// Administrator account store.
    pub admin_store: Arc<dyn PrincipalStore<Admin, NewAdmin>>,

    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Token encoder for customer sessions.
    pub user_jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder for customer sessions.
    pub user_jwt_decoder: Arc<JwtDecoder>,
    /// Token encoder for administrator sessions.
    pub admin_jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder for administrator sessions.
    pub admin_jwt_decoder: Arc<JwtDecoder>,
    /// Session carrier for the customer cookie.
    pub user_cookie: SessionCookie,
    /// Session carrier for the administrator cookie.
    pub admin_cookie: SessionCookie,
}

impl AppState {
    /// Wires the auth primitives from configuration around the given stores.
    ///
    /// Signing secrets are read here once; nothing re-reads them at runtime.
    pub fn new(
        config: Arc<AppConfig>,
        user_store: Arc<dyn PrincipalStore<User, NewUser>>,
        admin_store: Arc<dyn PrincipalStore<Admin, NewAdmin>>,
    ) -> Self {
        let auth = &config.auth;

        Self {
            password_hasher: Arc::new(PasswordHasher::new()),
            user_jwt_encoder: Arc::new(JwtEncoder::new(
                &auth.user_secret,
                auth.token_ttl_minutes,
                jwt::SUBJECT_USER,
            )),
            user_jwt_decoder: Arc::new(JwtDecoder::new(&auth.user_secret, jwt::SUBJECT_USER)),
            admin_jwt_encoder: Arc::new(JwtEncoder::new(
                &auth.admin_secret,
                auth.token_ttl_minutes,
                jwt::SUBJECT_ADMIN,
            )),
            admin_jwt_decoder: Arc::new(JwtDecoder::new(&auth.admin_secret, jwt::SUBJECT_ADMIN)),
            user_cookie: SessionCookie::new(
                USER_COOKIE,
                auth.token_ttl_minutes,
                auth.cookie_secure,
            ),
            admin_cookie: SessionCookie::new(
                ADMIN_COOKIE,
                auth.token_ttl_minutes,
                auth.cookie_secure,
            ),
            config,
            user_store,
            admin_store,
        }
    }
}
