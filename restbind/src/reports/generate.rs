//! Generate command report data structures.

use std::path::PathBuf;

use restbind_codegen::ArtifactKind;

use super::{
    format_counts,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generated artifacts per kind.
    pub counts: Vec<(ArtifactKind, usize)>,
    /// Artifacts that could not be rendered.
    pub failures: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Relative paths of files whose content changed.
    pub written: Vec<String>,
    /// Number of files already up to date.
    pub unchanged: usize,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn render_failures(&self, out: &mut dyn Output) {
        if self.failures.is_empty() {
            return;
        }
        out.newline();
        for failure in &self.failures {
            out.failure(failure);
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => {
                out.key_value("Generated", &format_counts(&self.counts));
                out.key_value("Output", &written.output_dir.display().to_string());
                if !written.written.is_empty() {
                    out.newline();
                    out.section(&format!("Written ({})", written.written.len()));
                    for path in &written.written {
                        out.written_file(path);
                    }
                }
                if written.unchanged > 0 {
                    out.newline();
                    out.key_value("Unchanged", &written.unchanged.to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.file_preview(&file.path, &file.content);
                }
                out.newline();
                out.preformatted(&format!(
                    "{} files would be generated ({})",
                    files.len(),
                    format_counts(&self.counts)
                ));
            }
        }
        self.render_failures(out);
    }
}
