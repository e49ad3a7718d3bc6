use std::path::Path;

use eyre::{Result, WrapErr};
use restbind_codegen::{
    Artifact, ArtifactFailure, GenerateResult, LanguageCodegen, Preview, PreviewFile,
};
use restbind_core::{GeneratedFile, WriteResult};
use restbind_descriptor::{ApiDescription, JavaConfig};

use crate::{
    JavaContext,
    files::{ClientJava, EnumJava, ProxyJava, SchemaJava},
};

type FileResult<'a> = restbind_codegen::Result<Box<dyn GeneratedFile + 'a>>;

fn boxed<'a>(file: impl GeneratedFile + 'a) -> Box<dyn GeneratedFile + 'a> {
    Box::new(file)
}

/// Java code generator producing Gson data classes and Retrofit proxies.
pub struct Generator<'a> {
    api: &'a ApiDescription,
    ctx: JavaContext,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Preview {
        let mut preview = Preview::default();
        for (artifact, file) in self.files() {
            match file {
                Ok(file) => preview.files.push(PreviewFile {
                    path: file.relative_path().display().to_string(),
                    content: file.render(),
                    artifact,
                }),
                Err(error) => preview.failures.push(Self::failure(artifact, error)),
            }
        }
        self.log_translation_table();
        preview
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for (artifact, file) in self.files() {
            let file = match file {
                Ok(file) => file,
                Err(error) => {
                    result.failures.push(Self::failure(artifact, error));
                    continue;
                }
            };
            let path = file.relative_path().display().to_string();
            let written = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", artifact))?;
            tracing::debug!(%artifact, %path, ?written, "generated");
            match written {
                WriteResult::Written => result.written.push((artifact, path)),
                WriteResult::Unchanged => result.unchanged.push((artifact, path)),
            }
        }
        self.log_translation_table();
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a ApiDescription, options: JavaConfig) -> Self {
        Self {
            api,
            ctx: JavaContext::new(options),
        }
    }

    pub fn context(&self) -> &JavaContext {
        &self.ctx
    }

    /// Every artifact in emission order: schemas, enums, proxies, then the
    /// optional client facade.
    fn files(&self) -> Vec<(Artifact, FileResult<'_>)> {
        let ctx = &self.ctx;
        let mut files: Vec<(Artifact, FileResult<'_>)> = Vec::new();

        for schema in &self.api.schemas {
            files.push((
                Artifact::schema(&schema.name),
                SchemaJava::new(ctx, schema).map(boxed),
            ));
        }

        for descriptor in self.api.enums() {
            files.push((
                Artifact::enumeration(&descriptor.name),
                Ok(boxed(EnumJava::new(ctx, &descriptor))),
            ));
        }

        for (class_name, endpoints) in self.api.endpoint_groups() {
            files.push((
                Artifact::proxy(class_name),
                ProxyJava::new(ctx, class_name, &endpoints)
                    .map(boxed),
            ));
        }

        if ctx.options.emit_client {
            files.push((
                Artifact::client(&ctx.options.client_class),
                ClientJava::new(ctx, self.api).map(boxed),
            ));
        }

        files
    }

    fn failure(artifact: Artifact, error: restbind_codegen::Error) -> ArtifactFailure {
        tracing::warn!(%artifact, %error, "artifact skipped");
        ArtifactFailure { artifact, error }
    }

    fn log_translation_table(&self) {
        tracing::debug!("type translation table:\n{}", self.ctx.translator);
    }
}
