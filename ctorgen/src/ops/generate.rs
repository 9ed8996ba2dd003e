//! Generate operation - render the registration table and apply it.

use std::path::Path;

use ctorgen_codegen::{ConstructorsFile, Registry};
use ctorgen_core::GeneratedFile;
use ctorgen_manifest::Profile;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, Outcome};

/// What to do with the rendered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create or overwrite the output.
    Write,
    /// Render only.
    DryRun,
    /// Compare against the existing output without writing.
    Check,
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// File the table is written to.
    pub output: &'a Path,
    /// Name shown in the warning header.
    pub generator: &'a str,
    pub mode: Mode,
}

/// Execute the generate operation on an already collected registry.
pub fn generate(
    profile: &Profile,
    registry: &Registry,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let file = ConstructorsFile::new(profile, registry, opts.generator).to_file(opts.output);

    let outcome = match opts.mode {
        Mode::Write => {
            file.write().wrap_err("Failed to write registration table")?;
            Outcome::Written
        }
        Mode::DryRun => Outcome::Preview {
            content: file.content().to_string(),
        },
        Mode::Check => Outcome::Checked(file.freshness()?),
    };

    Ok(GenerateReport {
        output: opts.output.to_path_buf(),
        registrations: registry.len(),
        inputs: registry
            .inputs()
            .iter()
            .map(|input| (input.path.clone(), input.count))
            .collect(),
        outcome,
    })
}
