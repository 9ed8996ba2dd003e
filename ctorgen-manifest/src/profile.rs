//! Generator profiles and TOML profile parsing.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, error::SourceContext};

/// Prefix joined to each extracted name to form its registration routine.
pub const DEFAULT_REGISTER_PREFIX: &str = "_register_";

/// Literals that drive one scan-and-emit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    marker: String,
    header: String,
    register_all: String,
    register_prefix: String,
}

impl Profile {
    /// Create a profile with the default `_register_` prefix.
    pub fn new(
        marker: impl Into<String>,
        header: impl Into<String>,
        register_all: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            header: header.into(),
            register_all: register_all.into(),
            register_prefix: DEFAULT_REGISTER_PREFIX.to_string(),
        }
    }

    /// Replace the registration routine prefix.
    pub fn with_register_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.register_prefix = prefix.into();
        self
    }

    /// Line prefix that marks a registration line.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Private header included by the generated file.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Name of the aggregating registration function.
    pub fn register_all(&self) -> &str {
        &self.register_all
    }

    pub fn register_prefix(&self) -> &str {
        &self.register_prefix
    }

    /// Registration routine for an extracted name, e.g. `_register_png`.
    pub fn routine(&self, name: &str) -> String {
        format!("{}{}", self.register_prefix, name)
    }

    /// Parse a profile TOML file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_profile(&content, &path.display().to_string())
    }
}

impl FromStr for Profile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_profile(s, "profile.toml")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    marker: Spanned<String>,
    header: Spanned<String>,
    register_all: Spanned<String>,
    register_prefix: Option<Spanned<String>>,
}

fn parse_profile(content: &str, filename: &str) -> Result<Profile> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawProfile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    require_non_empty(&ctx, "marker", &raw.marker)?;
    require_non_empty(&ctx, "header", &raw.header)?;
    require_non_empty(&ctx, "register_all", &raw.register_all)?;

    // Extraction looks for the first '(' after the marker, then the next ','.
    if let Some(c) = raw.marker.get_ref().chars().find(|c| matches!(c, '(' | ',')) {
        return Err(ctx.validation_error_at(
            format!("marker must not contain '{}'", c),
            raw.marker.span(),
        ));
    }

    let mut profile = Profile::new(
        raw.marker.into_inner(),
        raw.header.into_inner(),
        raw.register_all.into_inner(),
    );
    if let Some(prefix) = raw.register_prefix {
        profile = profile.with_register_prefix(prefix.into_inner());
    }
    Ok(profile)
}

fn require_non_empty(ctx: &SourceContext, key: &str, value: &Spanned<String>) -> Result<()> {
    if value.get_ref().trim().is_empty() {
        return Err(ctx.validation_error_at(format!("`{}` must not be empty", key), value.span()));
    }
    Ok(())
}
