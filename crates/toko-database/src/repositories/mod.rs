//! Concrete principal store implementations.

pub mod admin;
pub mod memory;
pub mod user;

pub use admin::AdminRepository;
pub use memory::{MemoryAdminStore, MemoryUserStore};
pub use user::UserRepository;

/// True when a sqlx error is a PostgreSQL unique-constraint violation.
///
/// Used to map the duplicate-email race (check-then-create) onto the
/// conflict error class instead of a generic database error.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
