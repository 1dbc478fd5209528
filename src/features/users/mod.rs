//! Registered users and the persistence boundary behind them.
//!
//! Users are created once by the registration flow and only read afterwards.
//! Storage is pluggable: PostgreSQL in production, an in-memory map when no
//! database is configured and in tests.

pub mod models;
pub mod services;
pub mod stores;

pub use services::UserService;
