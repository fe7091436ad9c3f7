//! Command-line interface

pub mod report;
pub mod types;

pub use report::{ConfigReport, DerivedValues, EffectiveCache};
pub use types::{Cli, OutputFormat};
