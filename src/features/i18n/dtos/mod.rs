pub mod translation_dto;

pub use translation_dto::*;
