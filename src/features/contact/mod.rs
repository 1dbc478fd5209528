//! Contact form submissions.
//!
//! Messages are validated and acknowledged with a one-time flash notice.
//! Nothing is stored and no mail is sent.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/contact` | No | Submit a contact message |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ContactService;
