pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod session;
pub mod upload;
