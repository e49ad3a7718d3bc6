//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a generated file whose content changed on disk.
    fn written_file(&mut self, path: &str);

    /// Render an artifact that could not be generated.
    fn failure(&mut self, msg: &str);

    /// Render the full content of a file that would be generated.
    fn file_preview(&mut self, path: &str, content: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output; failures are written to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn written_file(&mut self, path: &str) {
        println!("  + {}", path);
    }

    fn failure(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn file_preview(&mut self, path: &str, content: &str) {
        println!("── {} ──", path);
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
