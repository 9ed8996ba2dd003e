//! Core utilities and types for the ctorgen constructor generator.
//!
//! This crate provides the generated-file abstraction shared by the
//! code generator and the command line front end.

mod file;

// File operations
pub use file::{File, Freshness, GeneratedFile};
