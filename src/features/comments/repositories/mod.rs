pub mod comment_repository;

pub use comment_repository::*;
