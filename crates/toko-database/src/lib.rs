//! # toko-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! [`PrincipalStore`](toko_core::traits::PrincipalStore) implementations —
//! both the production sqlx repositories and in-memory stores used by the
//! integration tests.

pub mod connection;
pub mod migration;
pub mod repositories;
