//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for cross-cutting services such as password hashing.

pub mod hashing;
