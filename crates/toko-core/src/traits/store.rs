//! Keyed principal store contract consumed by the auth flows.

use async_trait::async_trait;

use crate::result::AppResult;

/// Lookup-and-create contract for a principal record store.
///
/// This trait is defined with generic type parameters so that each
/// principal class (user, admin) can have a strongly typed store. The
/// auth flows never touch the persistence engine directly; they consume
/// this contract and treat the store as opaque.
///
/// `create` must reject a record whose email is already present with a
/// conflict error, regardless of any pre-write check the caller performed.
#[async_trait]
pub trait PrincipalStore<Entity, NewEntity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    NewEntity: Send + Sync + 'static,
{
    /// Find a principal by email (the login handle).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Entity>>;

    /// Find a principal by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Entity>>;

    /// Create a new principal record and return it with its assigned id.
    async fn create(&self, record: &NewEntity) -> AppResult<Entity>;
}
