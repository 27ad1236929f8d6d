//! Synchronization pipeline
//!
//! Composes artifact loading, rendering, and fence substitution into one
//! linear pass: read artifact sources, render each, read the target
//! document, substitute per tag in configured order, write the document
//! back in place.
//!
//! String-based methods are the core functionality; file-based methods are
//! thin wrappers that read files and delegate. Nothing is written until
//! every earlier step has succeeded, so a failing run leaves the document
//! untouched.

use crate::docsync::config::SyncConfig;
use crate::docsync::rendering::RendererRegistry;
use crate::docsync::scanning;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error raised by a synchronization run
#[derive(Debug)]
pub enum SyncError {
    /// A source or document file could not be read or written
    Io { path: PathBuf, message: String },
    /// An artifact source could not be decoded by its renderer
    Format { path: PathBuf, message: String },
    /// The configuration could not be loaded
    Config(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Io { path, message } => {
                write!(f, "I/O error on '{}': {}", path.display(), message)
            }
            SyncError::Format { path, message } => {
                write!(f, "Malformed artifact '{}': {}", path.display(), message)
            }
            SyncError::Config(message) => write!(f, "Configuration error: {}", message),
        }
    }
}

impl std::error::Error for SyncError {}

/// What one synchronization pass did, tag by tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Tags whose fence body was regenerated
    pub replaced: Vec<String>,
    /// Tags with no fence region in the document (left as-is)
    pub missing: Vec<String>,
}

/// One rendered artifact, ready for substitution
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub tag: String,
    pub text: String,
}

/// Runs the load → render → substitute → write pipeline for one document.
pub struct Synchronizer {
    config: SyncConfig,
    registry: RendererRegistry,
}

impl Synchronizer {
    /// Create a synchronizer with the built-in renderers
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            registry: RendererRegistry::with_builtins(),
        }
    }

    /// Create a synchronizer with a custom renderer registry
    pub fn with_registry(config: SyncConfig, registry: RendererRegistry) -> Self {
        Self { config, registry }
    }

    /// The configuration this synchronizer runs with
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Read and render every configured artifact, in configuration order.
    ///
    /// A missing or unreadable source file is an I/O error; a source the
    /// renderer cannot decode is a format error. Either aborts the run
    /// before anything is written.
    pub fn load_artifacts(&self) -> Result<Vec<RenderedArtifact>, SyncError> {
        let mut rendered = Vec::with_capacity(self.config.artifacts.len());
        for spec in &self.config.artifacts {
            let path = Path::new(&spec.path);
            let source = fs::read_to_string(path).map_err(|e| SyncError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            let text = self
                .registry
                .render(spec.kind, &source)
                .map_err(|e| SyncError::Format {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            rendered.push(RenderedArtifact {
                tag: spec.tag.clone(),
                text,
            });
        }
        Ok(rendered)
    }

    /// Apply rendered artifacts to `document`: first matching region per
    /// tag, silent no-op for tags without one.
    pub fn apply(&self, document: &str, artifacts: &[RenderedArtifact]) -> (String, SyncReport) {
        let mut updated = document.to_string();
        let mut report = SyncReport::default();
        for artifact in artifacts {
            if scanning::find(&updated, &artifact.tag).is_some() {
                updated = scanning::substitute(&updated, &artifact.tag, &artifact.text);
                report.replaced.push(artifact.tag.clone());
            } else {
                report.missing.push(artifact.tag.clone());
            }
        }
        (updated, report)
    }

    /// Load artifacts and apply them to in-memory document text.
    pub fn sync_source(&self, document: &str) -> Result<(String, SyncReport), SyncError> {
        let artifacts = self.load_artifacts()?;
        Ok(self.apply(document, &artifacts))
    }

    /// Full pipeline: load artifacts, read the configured document,
    /// substitute, and write the result back to the same path.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let artifacts = self.load_artifacts()?;

        let path = Path::new(&self.config.document.path);
        let document = fs::read_to_string(path).map_err(|e| SyncError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (updated, report) = self.apply(&document, &artifacts);

        fs::write(path, updated).map_err(|e| SyncError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(report)
    }
}
