//! Landing pages that form submissions redirect to.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Home; shows and consumes the pending flash notice |
//! | GET | `/dashboard` | No | Post-registration landing |

pub mod dtos;
pub mod handlers;
pub mod routes;
