//! In-memory principal stores.
//!
//! Used by the integration tests and local development where a PostgreSQL
//! instance is unavailable. Behavior matches the sqlx repositories: ids are
//! assigned sequentially and a duplicate email on `create` is a conflict,
//! mirroring the database unique constraint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use toko_core::error::AppError;
use toko_core::result::AppResult;
use toko_core::traits::PrincipalStore;
use toko_entity::admin::{Admin, NewAdmin};
use toko_entity::user::{NewUser, User};

/// In-memory user store.
#[derive(Debug)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalStore<User, NewUser> for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let records = self.records.read().await;
        Ok(records.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn create(&self, record: &NewUser) -> AppResult<User> {
        let mut records = self.records.write().await;
        if records.values().any(|u| u.email == record.email) {
            return Err(AppError::conflict("Email is already registered"));
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            password_hash: record.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        records.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory admin store.
#[derive(Debug)]
pub struct MemoryAdminStore {
    records: RwLock<HashMap<i64, Admin>>,
    next_id: AtomicI64,
}

impl MemoryAdminStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryAdminStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalStore<Admin, NewAdmin> for MemoryAdminStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let records = self.records.read().await;
        Ok(records.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Admin>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn create(&self, record: &NewAdmin) -> AppResult<Admin> {
        let mut records = self.records.write().await;
        if records.values().any(|a| a.email == record.email) {
            return Err(AppError::conflict("Email is already registered"));
        }

        let admin = Admin {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            created_at: Utc::now(),
        };
        records.insert(admin.id, admin.clone());
        Ok(admin)
    }
}
