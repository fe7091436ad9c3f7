//! Domain layer for the aiproxy configuration snapshot
//!
//! This module contains the configuration data model and its derived values.

pub mod models;
