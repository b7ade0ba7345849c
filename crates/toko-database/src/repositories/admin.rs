//! Admin store implementation over PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use toko_core::error::{AppError, ErrorKind};
use toko_core::result::AppResult;
use toko_core::traits::PrincipalStore;
use toko_entity::admin::{Admin, NewAdmin};

use super::is_unique_violation;

/// Repository for administrator account lookup and creation.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalStore<Admin, NewAdmin> for AdminRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e)
            })
    }

    async fn create(&self, record: &NewAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            r#"INSERT INTO admins (name, email, password_hash)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict("Email is already registered")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create admin", e)
            }
        })
    }
}
