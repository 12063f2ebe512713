//! HTTP surface and process configuration for the Appraise service.
//!
//! The scoring itself lives in `appraise-core`; this crate wires it to an
//! axum router, permissive CORS, and an env-derived bind address.

pub mod config;
pub mod http;
