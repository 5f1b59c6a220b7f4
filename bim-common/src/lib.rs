//! # Bulk Image Meta Common Library
//!
//! Shared code for the bulk image meta tools:
//! - Error and result types
//! - Configuration loading (root folder, TOML config, commit policy settings)
//! - Database initialization for the attachment store

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;

pub use error::{Error, Result};
