//! Contact form submissions and the operator listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contacts` | No | Submit the contact form |
//! | GET | `/api/contacts` | Basic (admin) | List every submission |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ContactService;
