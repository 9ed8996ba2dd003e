//! Built-in generator presets.

use std::{fmt, str::FromStr};

use crate::Profile;

/// Built-in profiles for the two cairo registration tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Boilerplate targets (`CAIRO_BOILERPLATE*` lines)
    #[default]
    Boilerplate,
    /// Test-suite cases (`CAIRO_TEST*` lines)
    Test,
}

impl Preset {
    /// Returns the preset identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Boilerplate => "boilerplate",
            Preset::Test => "test",
        }
    }

    /// Build the profile this preset stands for.
    pub fn profile(&self) -> Profile {
        match self {
            Preset::Boilerplate => Profile::new(
                "CAIRO_BOILERPLATE",
                "cairo-boilerplate-private.h",
                "_cairo_boilerplate_register_all",
            ),
            Preset::Test => Profile::new(
                "CAIRO_TEST",
                "cairo-test-private.h",
                "_cairo_test_runner_register_tests",
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boilerplate" => Ok(Preset::Boilerplate),
            "test" | "tests" => Ok(Preset::Test),
            _ => Err(format!(
                "unknown preset '{}', expected 'boilerplate' or 'test'",
                s
            )),
        }
    }
}
