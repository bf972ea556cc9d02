// Request/response shapes exposed over HTTP
pub mod auth;
pub mod common;
pub mod user;
