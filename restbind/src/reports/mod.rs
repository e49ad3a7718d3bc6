//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod info;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use info::{GroupInfo, InfoReport, Stats};
pub use output::{Report, TerminalOutput};

use restbind_codegen::ArtifactKind;

/// Render per-kind counts as `3 schemas, 1 enum, ...`, skipping zero counts.
fn format_counts(counts: &[(ArtifactKind, usize)]) -> String {
    let parts: Vec<String> = counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(kind, n)| format!("{} {}{}", n, kind, if *n == 1 { "" } else { "s" }))
        .collect();
    if parts.is_empty() {
        "nothing".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::output::Output;

    /// Output that records every call as a plain line.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn written_file(&mut self, path: &str) {
            self.lines.push(format!("+ {}", path));
        }

        fn failure(&mut self, msg: &str) {
            self.lines.push(format!("error: {}", msg));
        }

        fn file_preview(&mut self, path: &str, content: &str) {
            self.lines.push(format!("-- {} --", path));
            self.lines.push(content.to_string());
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_counts() {
        assert_eq!(
            format_counts(&[
                (ArtifactKind::Schema, 3),
                (ArtifactKind::Enum, 1),
                (ArtifactKind::Proxy, 0),
            ]),
            "3 schemas, 1 enum"
        );
        assert_eq!(format_counts(&[(ArtifactKind::Client, 0)]), "nothing");
    }
}
