//! Core operations.
//!
//! This module contains the business logic for ctorgen,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, Mode, generate};
