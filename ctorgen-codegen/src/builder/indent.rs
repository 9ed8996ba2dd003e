//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Four spaces, as in cairo's C sources.
    pub const C: Self = Self("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
