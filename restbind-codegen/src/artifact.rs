//! Identity of a generated artifact.

use std::fmt;

use crate::Error;

/// The kind of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Schema,
    Enum,
    Proxy,
    Client,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Schema => "schema",
            ArtifactKind::Enum => "enum",
            ArtifactKind::Proxy => "proxy",
            ArtifactKind::Client => "client",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated artifact: one schema, enum, proxy group or client facade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub name: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn schema(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Schema, name)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Enum, name)
    }

    pub fn proxy(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Proxy, name)
    }

    pub fn client(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Client, name)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

/// An artifact that could not be emitted.
///
/// Failures are collected per artifact; they never stop the emission of
/// unrelated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFailure {
    pub artifact: Artifact,
    pub error: Error,
}

impl fmt::Display for ArtifactFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.artifact, self.error)
    }
}
