use miette::Diagnostic;
use thiserror::Error;

/// Result type for artifact generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the emission of a single artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unmapped type '{token}' for field '{field}' of '{owner}'")]
    #[diagnostic(
        code(restbind::unmapped_type),
        help("add a mapping for '{token}' to the type overrides")
    )]
    UnmappedType {
        token: String,
        field: String,
        owner: String,
    },

    #[error("invalid descriptor '{owner}': {message}")]
    #[diagnostic(code(restbind::descriptor_invariant))]
    DescriptorInvariant { owner: String, message: String },
}

impl Error {
    pub fn descriptor_invariant(owner: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DescriptorInvariant {
            owner: owner.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_type_message() {
        let err = Error::UnmappedType {
            token: "Frobnicator".to_string(),
            field: "frob".to_string(),
            owner: "FrameV3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unmapped type 'Frobnicator' for field 'frob' of 'FrameV3'"
        );
    }

    #[test]
    fn test_descriptor_invariant_message() {
        let err = Error::descriptor_invariant("FrameV3", "duplicate field 'rows'");
        assert_eq!(
            err.to_string(),
            "invalid descriptor 'FrameV3': duplicate field 'rows'"
        );
    }
}
