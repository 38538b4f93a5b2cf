//! Request-level extractors for authentication and permission checks.

pub mod auth;
