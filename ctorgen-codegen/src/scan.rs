//! Registration line scanning.
//!
//! A registration line starts with the marker prefix at column zero. Its
//! name is everything between the first `(` after the marker and the next
//! `,`, taken verbatim. A line that carries the marker but not a name is a
//! hard error.

use std::path::Path;

use ctorgen_manifest::Profile;
use miette::NamedSource;

use crate::{Error, Missing, Result};

/// A name extracted from one registration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Name as written in the source, not trimmed
    pub name: String,
    /// 1-based line number
    pub line: usize,
}

/// Outcome of matching one line against the marker.
#[derive(Debug, PartialEq, Eq)]
pub enum LineMatch<'l> {
    /// Line does not start with the marker
    Skip,
    /// Extracted name
    Name(&'l str),
    /// Line starts with the marker but carries no name
    Malformed(Missing),
}

/// Extracts registration names using a profile's marker prefix.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'p> {
    marker: &'p str,
}

impl<'p> Scanner<'p> {
    pub fn new(marker: &'p str) -> Self {
        Self { marker }
    }

    pub fn for_profile(profile: &'p Profile) -> Self {
        Self::new(profile.marker())
    }

    /// Match a single line, without its line terminator.
    pub fn match_line<'l>(&self, line: &'l str) -> LineMatch<'l> {
        let Some(rest) = line.strip_prefix(self.marker) else {
            return LineMatch::Skip;
        };
        let Some(open) = rest.find('(') else {
            return LineMatch::Malformed(Missing::OpenParen);
        };
        let args = &rest[open + 1..];
        match args.find(',') {
            Some(comma) => LineMatch::Name(&args[..comma]),
            None => LineMatch::Malformed(Missing::Comma),
        }
    }

    /// Scan text content. `filename` is only used for diagnostics.
    pub fn scan_str(&self, content: &str, filename: &str) -> Result<Vec<Registration>> {
        let mut registrations = Vec::new();

        for (index, (offset, line)) in split_lines(content).into_iter().enumerate() {
            match self.match_line(line) {
                LineMatch::Skip => {}
                LineMatch::Name(name) => registrations.push(Registration {
                    name: name.to_string(),
                    line: index + 1,
                }),
                LineMatch::Malformed(missing) => {
                    return Err(Box::new(Error::MissingName {
                        src: NamedSource::new(filename, content.to_string()),
                        span: (offset, line.len()).into(),
                        path: filename.to_string(),
                        line: index + 1,
                        marker: self.marker.to_string(),
                        missing,
                    }));
                }
            }
        }

        Ok(registrations)
    }

    /// Read a UTF-8 file and scan it.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Registration>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        self.scan_str(&content, &path.display().to_string())
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, yielding each line with its byte offset.
fn split_lines(content: &str) -> Vec<(usize, &str)> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push((start, &content[start..i]));
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push((start, &content[start..i]));
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push((start, &content[start..]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MARKER: &str = "CAIRO_BOILERPLATE";

    fn names(content: &str) -> Vec<String> {
        Scanner::new(MARKER)
            .scan_str(content, "input.c")
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_match_line_extracts_first_argument() {
        let scanner = Scanner::new(MARKER);
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE_FOO(my_target, extra_stuff_here)"),
            LineMatch::Name("my_target")
        );
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE(x,y,z)"),
            LineMatch::Name("x")
        );
    }

    #[test]
    fn test_match_line_keeps_whitespace() {
        let scanner = Scanner::new(MARKER);
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE ( spaced ,x)"),
            LineMatch::Name(" spaced ")
        );
    }

    #[test]
    fn test_match_line_skips_unanchored_marker() {
        let scanner = Scanner::new(MARKER);
        assert_eq!(
            scanner.match_line(" CAIRO_BOILERPLATE(indented, x)"),
            LineMatch::Skip
        );
        assert_eq!(
            scanner.match_line("/* see CAIRO_BOILERPLATE(foo, bar) */"),
            LineMatch::Skip
        );
        assert_eq!(
            scanner.match_line("cairo_boilerplate(lower, x)"),
            LineMatch::Skip
        );
    }

    #[test]
    fn test_match_line_malformed() {
        let scanner = Scanner::new(MARKER);
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE_H"),
            LineMatch::Malformed(Missing::OpenParen)
        );
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE(lonely)"),
            LineMatch::Malformed(Missing::Comma)
        );
    }

    #[test]
    fn test_comma_before_paren_is_not_a_name() {
        let scanner = Scanner::new(MARKER);
        assert_eq!(
            scanner.match_line("CAIRO_BOILERPLATE, odd(only)"),
            LineMatch::Malformed(Missing::Comma)
        );
    }

    #[test]
    fn test_scan_preserves_line_order() {
        let content = "\
#include \"cairo-boilerplate-private.h\"

CAIRO_BOILERPLATE(zeta, create_zeta)
static void helper (void);
CAIRO_BOILERPLATE(alpha, create_alpha)
";
        assert_eq!(names(content), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_scan_records_line_numbers() {
        let found = Scanner::new(MARKER)
            .scan_str("a\nCAIRO_BOILERPLATE(x, y)\n", "input.c")
            .unwrap();
        assert_eq!(
            found,
            vec![Registration {
                name: "x".to_string(),
                line: 2
            }]
        );
    }

    #[test]
    fn test_scan_crlf_and_missing_trailing_newline() {
        assert_eq!(
            names("CAIRO_BOILERPLATE(a, b)\r\nCAIRO_BOILERPLATE(c, d)"),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_scan_carriage_return_only() {
        assert_eq!(
            names("/* x */\rCAIRO_BOILERPLATE(a, b)\rCAIRO_BOILERPLATE(c, d)\r"),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_split_lines_offsets() {
        assert_eq!(
            split_lines("a\r\nbb\rc\n\nd"),
            vec![(0, "a"), (3, "bb"), (6, "c"), (8, ""), (9, "d")]
        );
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_scan_malformed_after_carriage_return_reports_line() {
        let err = Scanner::new(MARKER)
            .scan_str("ok\rCAIRO_BOILERPLATE\r", "cr.c")
            .unwrap_err();
        match *err {
            Error::MissingName { line, span, .. } => {
                assert_eq!(line, 2);
                assert_eq!(span.offset(), 3);
            }
            other => panic!("expected MissingName, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_empty() {
        assert!(names("").is_empty());
        assert!(names("int main (void) { return 0; }\n").is_empty());
    }

    #[test]
    fn test_scan_malformed_reports_line() {
        let err = Scanner::new(MARKER)
            .scan_str("ok\nCAIRO_BOILERPLATE_PRIVATE_H\n", "boilerplate.c")
            .unwrap_err();

        match *err {
            Error::MissingName {
                line,
                missing,
                span,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(missing, Missing::OpenParen);
                assert_eq!(span.offset(), 3);
                assert_eq!(span.len(), "CAIRO_BOILERPLATE_PRIVATE_H".len());
            }
            other => panic!("expected MissingName, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_malformed_message() {
        let err = Scanner::new(MARKER)
            .scan_str("CAIRO_BOILERPLATE(x)\n", "b.c")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "b.c:1: registration line has no ',' after '('"
        );
    }

    #[test]
    fn test_scan_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("png.c");
        fs::write(&path, "CAIRO_BOILERPLATE_PNG(png_backend, png_create)\n").unwrap();

        let found = Scanner::new(MARKER).scan_file(&path).unwrap();
        assert_eq!(found[0].name, "png_backend");
    }

    #[test]
    fn test_scan_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = Scanner::new(MARKER)
            .scan_file(&temp.path().join("missing.c"))
            .unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_scan_file_not_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.c");
        fs::write(&path, [0x43, 0xff, 0xfe, b'\n']).unwrap();

        let err = Scanner::new(MARKER).scan_file(&path).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
