pub mod translation_handler;

pub use translation_handler::*;
