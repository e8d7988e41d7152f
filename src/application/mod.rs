/// Login and session handling
pub mod auth;
/// BusinessFlow REST client
pub mod client;
/// Application configuration module
pub mod config;
/// File-driven import of applications
pub mod import;
/// Service traits
pub mod interfaces;
