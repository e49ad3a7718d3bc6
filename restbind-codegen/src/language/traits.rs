//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::{Artifact, ArtifactFailure, ArtifactKind};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating client bindings in a
/// new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Render every artifact in memory without writing to disk
    fn preview(&self) -> Preview;

    /// Generate all artifacts into the specified output directory
    ///
    /// Artifacts that fail to render are reported in
    /// [`GenerateResult::failures`]; only I/O errors abort the run.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub artifact: Artifact,
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of an in-memory render
#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<PreviewFile>,
    pub failures: Vec<ArtifactFailure>,
}

impl Preview {
    /// Find a previewed file by its relative path.
    pub fn file(&self, path: &str) -> Option<&PreviewFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Number of rendered artifacts of the given kind.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.files.iter().filter(|f| f.artifact.kind == kind).count()
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<(Artifact, String)>,
    /// Files whose content on disk was already up to date
    pub unchanged: Vec<(Artifact, String)>,
    /// Artifacts that could not be rendered
    pub failures: Vec<ArtifactFailure>,
}

impl GenerateResult {
    /// Number of generated artifacts of the given kind, written or unchanged.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.written
            .iter()
            .chain(&self.unchanged)
            .filter(|(artifact, _)| artifact.kind == kind)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_preview_lookup_and_count() {
        let preview = Preview {
            files: vec![
                PreviewFile {
                    artifact: Artifact::schema("FrameV3"),
                    path: "pojos/FrameV3.java".to_string(),
                    content: String::new(),
                },
                PreviewFile {
                    artifact: Artifact::proxy("Frames"),
                    path: "retrofit/Frames.java".to_string(),
                    content: String::new(),
                },
            ],
            failures: Vec::new(),
        };

        assert!(preview.file("pojos/FrameV3.java").is_some());
        assert!(preview.file("pojos/Nope.java").is_none());
        assert_eq!(preview.count(ArtifactKind::Schema), 1);
        assert_eq!(preview.count(ArtifactKind::Enum), 0);
    }

    #[test]
    fn test_generate_result_count() {
        let result = GenerateResult {
            written: vec![(Artifact::schema("A"), "A.java".to_string())],
            unchanged: vec![(Artifact::schema("B"), "B.java".to_string())],
            failures: vec![ArtifactFailure {
                artifact: Artifact::schema("C"),
                error: Error::descriptor_invariant("C", "broken"),
            }],
        };

        assert_eq!(result.count(ArtifactKind::Schema), 2);
        assert!(!result.is_success());
    }
}
