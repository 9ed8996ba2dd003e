//! Terminal rendering for generator reports.

/// Sink that reports write to.
///
/// A report calls these in order; the sink picks the stream and layout.
/// Status lines go to stdout, warnings and errors to stderr.
pub trait Output {
    /// Heading for the lines that follow.
    fn section(&mut self, name: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Indented `- text` line.
    fn list_item(&mut self, text: &str);

    /// Non-fatal problem, on stderr.
    fn warning(&mut self, msg: &str);

    /// Failure the exit code also reflects, on stderr.
    fn error(&mut self, msg: &str);

    /// Labelled rule between blocks of output.
    fn divider(&mut self, label: &str);

    /// Text printed verbatim, with no trailing newline added.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Result of an operation that knows how to describe itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes reports to the process's stdout and stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
