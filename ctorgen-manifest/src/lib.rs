// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generator profiles for ctorgen.
//!
//! A [`Profile`] carries every literal that shapes the scan and the
//! generated file: the marker prefix, the private header, the aggregate
//! function name and the per-name registration prefix. Profiles come from
//! a built-in [`Preset`] or from a TOML file.

mod error;
mod preset;
mod profile;

pub use error::{Error, Result};
pub use preset::Preset;
pub use profile::{DEFAULT_REGISTER_PREFIX, Profile};
