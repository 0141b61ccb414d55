//! # Razzies Common Library
//!
//! Shared code for the razzies services:
//! - Error type
//! - Configuration loading and path resolution
//! - SQLite initialization, movie rows and CSV seeding

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
