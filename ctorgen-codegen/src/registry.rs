//! Aggregation of registration names across input files.

use std::path::{Path, PathBuf};

use crate::{Result, Scanner};

/// Number of registrations a single input contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSummary {
    pub path: PathBuf,
    pub count: usize,
}

/// Every registration name found across a set of inputs, sorted.
///
/// Names are never deduplicated; a name registered twice is emitted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
    inputs: Vec<InputSummary>,
}

impl Registry {
    /// Scan each input in order and sort the combined names.
    ///
    /// Stops at the first input that cannot be read or scanned.
    pub fn collect<P: AsRef<Path>>(scanner: &Scanner<'_>, inputs: &[P]) -> Result<Self> {
        let mut names = Vec::new();
        let mut summaries = Vec::with_capacity(inputs.len());

        for input in inputs {
            let path = input.as_ref();
            let found = scanner.scan_file(path)?;
            summaries.push(InputSummary {
                path: path.to_path_buf(),
                count: found.len(),
            });
            names.extend(found.into_iter().map(|r| r.name));
        }

        Ok(Self::from_names(names).with_inputs(summaries))
    }

    /// Build a registry from names in discovery order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        Self {
            names,
            inputs: Vec::new(),
        }
    }

    fn with_inputs(mut self, inputs: Vec<InputSummary>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Names in emission order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Per-input counts in the order the inputs were scanned.
    pub fn inputs(&self) -> &[InputSummary] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
