//! Public comment wall.
//!
//! Submissions are validated, trimmed, stamped with the submitter origin and
//! stored auto-approved. Readers only ever see approved comments, newest first.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/comments` | No | List approved comments |
//! | POST | `/api/comments` | No | Post a comment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::CommentService;
