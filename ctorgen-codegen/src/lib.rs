// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Registration table generation for ctorgen.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware code building (CodeBuilder, Indent)
//! - [`scan`] - Marker line matching and name extraction
//! - [`registry`] - Sorted aggregation of names across inputs
//! - [`constructors`] - The generated C registration table

pub mod builder;
pub mod constructors;
mod error;
pub mod registry;
pub mod scan;

pub use constructors::ConstructorsFile;
pub use error::{Error, Missing, Result};
pub use registry::{InputSummary, Registry};
pub use scan::{LineMatch, Registration, Scanner};
