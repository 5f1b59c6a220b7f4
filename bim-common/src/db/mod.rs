//! Database initialization for the attachment store

pub mod init;

pub use init::*;
