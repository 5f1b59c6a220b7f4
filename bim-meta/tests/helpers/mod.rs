//! Test Helper Utilities
//!
//! Shared utilities for testing bim-meta

#![allow(dead_code)]

pub mod db_utils;
pub mod log_capture;
pub mod store_utils;

// Re-export commonly used items
pub use db_utils::{create_test_db, seed_attachments};
pub use log_capture::{capture_logs, LogCapture};
pub use store_utils::FaultyStore;
