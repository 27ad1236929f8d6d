//! Records renderer
//!
//! Parses a structured-record source as JSON and pretty-prints it back
//! with two-space indentation. `serde_json` is built with `preserve_order`,
//! so keys come back out in the order the source declared them and the
//! rendered text re-parses to a value deeply equal to the original.

use super::registry::{RenderError, Renderer};
use serde_json::Value;

/// Renders a JSON source as deterministic pretty-printed JSON
pub struct RecordsRenderer;

impl Renderer for RecordsRenderer {
    fn name(&self) -> &str {
        "records"
    }

    fn render(&self, source: &str) -> Result<String, RenderError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| RenderError::MalformedSource(e.to_string()))?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| RenderError::MalformedSource(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON records pretty-printed with the key order of the source"
    }
}
