//! Renderer implementations for artifact sources
//!
//! This module contains the renderers that turn the raw text of an example
//! data file into the text injected into a fenced block:
//! - records: JSON pretty-printed with the key order of the source
//! - raw: pass-through
//! - table: CSV rendered as a padded pipe table

pub mod raw;
pub mod records;
pub mod registry;
pub mod table;

pub use raw::RawRenderer;
pub use records::RecordsRenderer;
pub use registry::{RenderError, Renderer, RendererRegistry};
pub use table::TableRenderer;
