//! Access-token handling.
//!
//! - [`jwt`] -- claims, validation, and the token-minting helper used by
//!   tests and operational tooling.

pub mod jwt;
