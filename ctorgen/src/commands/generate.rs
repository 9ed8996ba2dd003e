use std::path::PathBuf;

use clap::Args;
use ctorgen_codegen::{Registry, Scanner};
use ctorgen_manifest::{Preset, Profile};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, Mode},
    reports::{Report, TerminalOutput},
};

/// Fallback when the invoking path is not available
const DEFAULT_GENERATOR: &str = "ctorgen";

#[derive(Args)]
pub struct GenerateCommand {
    /// File to create or overwrite
    pub output: PathBuf,

    /// Source files to scan, in order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Built-in profile to generate with
    #[arg(short, long, default_value = "boilerplate")]
    pub preset: Preset,

    /// TOML profile file (replaces the preset)
    #[arg(long, conflicts_with = "preset")]
    pub profile: Option<PathBuf>,

    /// Name shown in the warning header (defaults to this program's path)
    #[arg(long)]
    pub generator: Option<String>,

    /// Print the generated file instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the output file is missing or out of date
    #[arg(long)]
    pub check: bool,

    /// Print a summary after generating
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let profile = self.load_profile();
        let scanner = Scanner::for_profile(&profile);
        let registry = Registry::collect(&scanner, &self.inputs).unwrap_or_exit();

        let generator = self.generator_name();
        let report = ops::generate(
            &profile,
            &registry,
            GenerateOptions {
                output: &self.output,
                generator: &generator,
                mode: self.mode(),
            },
        )?;

        if self.verbose || !report.is_routine() {
            report.render(&mut TerminalOutput::new());
        }

        if report.is_stale() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn load_profile(&self) -> Profile {
        match &self.profile {
            Some(path) => Profile::from_file(path).unwrap_or_exit(),
            None => self.preset.profile(),
        }
    }

    fn generator_name(&self) -> String {
        self.generator
            .clone()
            .or_else(|| {
                std::env::args_os()
                    .next()
                    .map(|arg| arg.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| DEFAULT_GENERATOR.to_string())
    }

    fn mode(&self) -> Mode {
        if self.dry_run {
            Mode::DryRun
        } else if self.check {
            Mode::Check
        } else {
            Mode::Write
        }
    }
}
