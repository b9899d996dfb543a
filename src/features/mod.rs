pub mod comments;
pub mod contacts;
pub mod i18n;
