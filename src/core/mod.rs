//! Core library components.
//!
//! Domain types, the reconciliation logic, and the GitHub / Google Cloud
//! clients it runs against. Nothing here prints except through the writers
//! passed in by the CLI.

pub mod assert;
pub mod auth;
pub mod config;
pub mod constants;
pub mod directory;
pub mod dispatch;
pub mod domain;
pub mod gcp;
pub mod github;
pub mod http;
pub mod reconcile;
pub mod repo;
pub mod types;
