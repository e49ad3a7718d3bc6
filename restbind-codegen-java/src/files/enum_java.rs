//! Enum declaration file.

use std::path::PathBuf;

use restbind_codegen::CodeFragment;
use restbind_core::GeneratedFile;
use restbind_descriptor::EnumDescriptor;

use crate::{JavaContext, JavaFile};

/// A Java enum with members in the order given.
#[derive(Debug, Clone)]
pub struct EnumJava<'a> {
    ctx: &'a JavaContext,
    name: String,
    members: Vec<String>,
}

impl<'a> EnumJava<'a> {
    pub fn new(ctx: &'a JavaContext, descriptor: &EnumDescriptor) -> Self {
        Self {
            ctx,
            name: descriptor.name.clone(),
            members: descriptor.members.clone(),
        }
    }
}

impl GeneratedFile for EnumJava<'_> {
    fn relative_path(&self) -> PathBuf {
        self.ctx.schema_dir().join(format!("{}.java", self.name))
    }

    fn render(&self) -> String {
        let members = self
            .members
            .iter()
            .map(|m| CodeFragment::line(format!("{},", m)))
            .collect();
        JavaFile::new(&self.ctx.options.schema_package)
            .notice(self.ctx.options.notice.as_deref())
            .add(CodeFragment::block(
                format!("public enum {} {{", self.name),
                members,
                Some("}".to_string()),
            ))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_members_in_order() {
        let ctx = JavaContext::default();
        let descriptor = EnumDescriptor {
            name: "ModelCategory".to_string(),
            members: vec!["Binomial".to_string(), "Regression".to_string()],
        };
        let file = EnumJava::new(&ctx, &descriptor);
        assert_eq!(
            file.relative_path(),
            PathBuf::from("water/bindings/pojos/ModelCategory.java")
        );
        assert!(
            file.render()
                .ends_with("public enum ModelCategory {\n    Binomial,\n    Regression,\n}\n")
        );
    }

    #[test]
    fn test_enum_without_members() {
        let ctx = JavaContext::default();
        let descriptor = EnumDescriptor {
            name: "Empty".to_string(),
            members: vec![],
        };
        assert!(
            EnumJava::new(&ctx, &descriptor)
                .render()
                .ends_with("public enum Empty {\n}\n")
        );
    }
}
