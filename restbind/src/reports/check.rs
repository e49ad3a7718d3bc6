//! Check command report data structures.

use std::path::PathBuf;

use restbind_codegen::ArtifactKind;

use super::{
    format_counts,
    output::{Output, Report},
};

/// Report data from an in-memory render.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the description dump.
    pub description_path: PathBuf,
    /// Renderable artifacts per kind.
    pub counts: Vec<(ArtifactKind, usize)>,
    /// Artifact failures.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether every artifact rendered.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.failure(error);
        }
        if !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.description_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} artifact{} failed",
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
        out.preformatted(&format!("  {}", format_counts(&self.counts)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_valid_report() {
        let report = CheckReport {
            description_path: PathBuf::from("schemas.json"),
            counts: vec![(ArtifactKind::Schema, 2), (ArtifactKind::Enum, 1)],
            errors: vec![],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(out.lines, vec!["✓ schemas.json is valid", "  2 schemas, 1 enum"]);
    }

    #[test]
    fn test_failures_listed_first() {
        let report = CheckReport {
            description_path: PathBuf::from("schemas.json"),
            counts: vec![(ArtifactKind::Schema, 1)],
            errors: vec!["proxy 'Frames': unmapped type 'X' for field 'x' of 'Frames.list'".to_string()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.lines[0],
            "error: proxy 'Frames': unmapped type 'X' for field 'x' of 'Frames.list'"
        );
        assert_eq!(out.lines[2], "✗ 1 artifact failed");
    }
}
