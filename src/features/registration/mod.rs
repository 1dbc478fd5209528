//! User registration.
//!
//! Validates a sign-up form, hashes the password and creates the user. All
//! field errors are reported together and nothing is stored unless every
//! field passes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/register` | No | Register a new user |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::RegistrationService;
