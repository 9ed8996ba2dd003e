use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for scanning operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The piece of a registration line that could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// No `(` after the marker
    OpenParen,
    /// No `,` after the `(`
    Comma,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::OpenParen => write!(f, "'('"),
            Missing::Comma => write!(f, "',' after '('"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(ctorgen::input_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: registration line has no {missing}")]
    #[diagnostic(
        code(ctorgen::missing_name),
        help("lines starting with `{marker}` must look like `{marker}(name, ...)`")
    )]
    MissingName {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {missing} here")]
        span: SourceSpan,
        path: String,
        /// 1-based line number
        line: usize,
        marker: String,
        missing: Missing,
    },
}
