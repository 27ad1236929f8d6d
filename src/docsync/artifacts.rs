//! Artifact model
//!
//! An artifact is one example data source feeding one fenced block in the
//! target document. The kind selects the renderer; the tag selects the
//! fence region the rendered text lands in.

use serde::Deserialize;
use std::fmt;

/// Renderer selector for an artifact source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Structured records, parsed as JSON and pretty-printed back
    Records,
    /// Opaque text, passed through unchanged
    Raw,
    /// Comma-separated rows, rendered as a pipe table
    Table,
}

impl ArtifactKind {
    /// Registry name of the renderer handling this kind
    pub fn renderer_name(&self) -> &'static str {
        match self {
            ArtifactKind::Records => "records",
            ArtifactKind::Raw => "raw",
            ArtifactKind::Table => "table",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.renderer_name())
    }
}

/// One configured artifact source: which fence tag it feeds, how it
/// renders, and where it is read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactSpec {
    /// Language tag of the fenced block this artifact regenerates
    pub tag: String,
    /// Renderer kind
    pub kind: ArtifactKind,
    /// Path of the source file, relative to the working directory
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_names() {
        assert_eq!(ArtifactKind::Records.renderer_name(), "records");
        assert_eq!(ArtifactKind::Raw.renderer_name(), "raw");
        assert_eq!(ArtifactKind::Table.renderer_name(), "table");
    }

    #[test]
    fn test_kind_display_matches_renderer_name() {
        assert_eq!(ArtifactKind::Table.to_string(), "table");
    }

    #[test]
    fn test_kind_deserializes_from_kebab_case() {
        let kind: ArtifactKind = serde_json::from_str("\"records\"").unwrap();
        assert_eq!(kind, ArtifactKind::Records);
    }

    #[test]
    fn test_spec_deserializes() {
        let spec: ArtifactSpec = serde_json::from_str(
            r#"{"tag": "csv", "kind": "table", "path": "example/result.csv"}"#,
        )
        .unwrap();
        assert_eq!(spec.tag, "csv");
        assert_eq!(spec.kind, ArtifactKind::Table);
        assert_eq!(spec.path, "example/result.csv");
    }
}
