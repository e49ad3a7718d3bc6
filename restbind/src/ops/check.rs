//! Check operation - render everything in memory.

use std::path::Path;

use restbind_codegen_java::{Generator, LanguageCodegen};
use restbind_descriptor::{ApiDescription, JavaConfig};

use super::KINDS;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Renders every artifact without touching disk and collects the failures.
pub fn check(api: &ApiDescription, config: JavaConfig, description_path: &Path) -> CheckReport {
    let preview = Generator::new(api, config).preview();

    CheckReport {
        description_path: description_path.to_path_buf(),
        counts: KINDS.iter().map(|&kind| (kind, preview.count(kind))).collect(),
        errors: preview.failures.iter().map(ToString::to_string).collect(),
    }
}
