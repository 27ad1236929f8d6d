//! Raw renderer: the source text is the rendered text.

use super::registry::{RenderError, Renderer};

pub struct RawRenderer;

impl Renderer for RawRenderer {
    fn name(&self) -> &str {
        "raw"
    }

    fn render(&self, source: &str) -> Result<String, RenderError> {
        Ok(source.to_string())
    }

    fn description(&self) -> &str {
        "Opaque text passed through unchanged"
    }
}
