//! Generate operation - Java sources from an API description.

use std::path::Path;

use eyre::{Context, Result};
use restbind_codegen::ArtifactKind;
use restbind_codegen_java::{Generator, LanguageCodegen};
use restbind_descriptor::{ApiDescription, JavaConfig};

use super::KINDS;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Artifact failures end up in the report; only I/O errors are returned.
pub fn generate(
    api: &ApiDescription,
    config: JavaConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(api, config);

    if opts.dry_run {
        let preview = generator.preview();
        let counts = KINDS.map(|kind| (kind, preview.count(kind)));
        return Ok(GenerateReport {
            counts: counts.to_vec(),
            failures: preview.failures.iter().map(ToString::to_string).collect(),
            result: GenerationResult::Preview(
                preview
                    .files
                    .into_iter()
                    .map(|f| PreviewFile {
                        path: f.path,
                        content: f.content,
                    })
                    .collect(),
            ),
        });
    }

    tracing::debug!(output = %opts.output_dir.display(), "generating");
    let result = generator
        .generate(opts.output_dir)
        .wrap_err("Failed to generate code")?;
    let counts: Vec<(ArtifactKind, usize)> =
        KINDS.iter().map(|&kind| (kind, result.count(kind))).collect();

    Ok(GenerateReport {
        counts,
        failures: result.failures.iter().map(ToString::to_string).collect(),
        result: GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written.into_iter().map(|(_, path)| path).collect(),
            unchanged: result.unchanged.len(),
        }),
    })
}
