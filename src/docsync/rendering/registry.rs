//! Renderer registry
//!
//! This module provides a pluggable registry system for artifact renderers.
//! Each renderer implements the `Renderer` trait and can be registered with
//! `RendererRegistry` under its name.

use crate::docsync::artifacts::ArtifactKind;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur while rendering an artifact source
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Renderer not found in registry
    RendererNotFound(String),
    /// Source text could not be decoded by the renderer
    MalformedSource(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RendererNotFound(name) => write!(f, "Renderer '{name}' not found"),
            RenderError::MalformedSource(msg) => write!(f, "Malformed source: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Trait for artifact renderers
///
/// Implementors turn the raw text of an artifact source into the text that
/// replaces a fenced block body.
pub trait Renderer: Send + Sync {
    /// The name of this renderer (e.g., "records", "table")
    fn name(&self) -> &str;

    /// Render raw source text into block text
    fn render(&self, source: &str) -> Result<String, RenderError>;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of artifact renderers
///
/// Provides a centralized registry for all available renderers. Renderers
/// can be registered and retrieved by name.
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Render source text with the renderer for the given artifact kind
    pub fn render(&self, kind: ArtifactKind, source: &str) -> Result<String, RenderError> {
        let name = kind.renderer_name();
        let renderer = self
            .get(name)
            .ok_or_else(|| RenderError::RendererNotFound(name.to_string()))?;
        renderer.render(source)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in renderers
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(super::RecordsRenderer);
        registry.register(super::RawRenderer);
        registry.register(super::TableRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
