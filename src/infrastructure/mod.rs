//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Configuration resolution (file system and process environment)
//! - Logging infrastructure

pub mod config;
pub mod logging;
