//! Generate command report data structures.

use std::path::PathBuf;

use ctorgen_core::Freshness;

use super::output::{Output, Report};

/// Report data from one generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output file path.
    pub output: PathBuf,

    /// Number of registrations emitted, duplicates included.
    pub registrations: usize,

    /// Each scanned input with the number of registrations it contributed.
    pub inputs: Vec<(PathBuf, usize)>,

    pub outcome: Outcome,
}

/// What happened to the output file.
#[derive(Debug)]
pub enum Outcome {
    /// The output was written.
    Written,
    /// Dry-run preview of the rendered file.
    Preview { content: String },
    /// The output was compared with the rendered file.
    Checked(Freshness),
}

impl GenerateReport {
    /// True when a check found the output missing or different.
    pub fn is_stale(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Checked(Freshness::Stale | Freshness::Missing)
        )
    }

    /// True when nothing needs the user's attention.
    pub fn is_routine(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Written | Outcome::Checked(Freshness::Current)
        )
    }

    fn output_display(&self) -> String {
        self.output.display().to_string()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            Outcome::Written => {
                self.render_summary(out);
                out.key_value("Generated", &self.output_display());
            }
            Outcome::Preview { content } => {
                out.divider(&self.output_display());
                out.preformatted(content);
                out.divider("Summary");
                self.render_summary(out);
            }
            Outcome::Checked(Freshness::Current) => {
                self.render_summary(out);
                out.key_value("Up to date", &self.output_display());
            }
            Outcome::Checked(Freshness::Stale) => {
                out.error(&format!(
                    "{} is out of date, rerun without --check",
                    self.output_display()
                ));
            }
            Outcome::Checked(Freshness::Missing) => {
                out.error(&format!("{} does not exist", self.output_display()));
            }
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        for (path, count) in &self.inputs {
            if *count == 0 {
                out.warning(&format!("{} has no registration lines", path.display()));
            }
        }

        out.section(&format!("Registrations ({})", self.registrations));
        for (path, count) in &self.inputs {
            out.list_item(&format!("{} ({})", path.display(), count));
        }
        out.newline();
    }
}
