//! Locale string lookup for the two site languages.
//!
//! Tables are compiled into the binary and parsed once at startup. Lookups
//! never fail: an unknown key resolves to the key itself so missing strings
//! stay visible in the UI.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/i18n/{locale}` | No | Whole string table for a locale |
//! | GET | `/api/i18n/translate` | No | Resolve one dotted key |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::Locale;
pub use services::TranslationService;
