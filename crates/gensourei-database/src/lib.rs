//! # gensourei-database
//!
//! PostgreSQL connection management, migrations, and the database-backed
//! implementations of the credential and session stores.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use migration::run_migrations;
pub use repositories::{SessionRepository, UserRepository};
