//! Fence-region scanning
//!
//! Locates fenced code blocks in a document as explicit byte spans and
//! replaces their bodies. Modeling regions as spans keeps the two edge
//! behaviors visible and testable: only the first region with a given tag
//! is ever replaced, and a tag with no region leaves the document
//! untouched.
//!
//! The scan is line-based. A fence opens on a ```` ```tag ```` line and
//! closes on the next bare ```` ``` ```` line; marker-looking lines inside
//! an open fence are body content, so fences never nest. A fence still
//! open at end of input yields no region.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Opening marker: a fence line carrying a language tag
static OPEN_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```([A-Za-z0-9_-]+)[ \t]*$").unwrap());

/// Closing marker: a bare fence line
static CLOSE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[ \t]*$").unwrap());

/// One fenced region of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceRegion {
    /// Language tag of the opening marker; `None` for untagged fences
    pub tag: Option<String>,
    /// Byte range of the body: from just after the opening marker line to
    /// the start of the closing marker line
    pub body: Range<usize>,
}

/// Scan a document for fenced regions, in document order.
pub fn scan(document: &str) -> Vec<FenceRegion> {
    let mut regions = Vec::new();
    // (tag, body start) of the currently open fence
    let mut open: Option<(Option<String>, usize)> = None;
    let mut offset = 0;

    for line in document.split_inclusive('\n') {
        let line_end = offset + line.len();
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        match &open {
            None => {
                if let Some(caps) = OPEN_FENCE.captures(content) {
                    open = Some((Some(caps[1].to_string()), line_end));
                } else if CLOSE_FENCE.is_match(content) {
                    open = Some((None, line_end));
                }
            }
            Some((tag, body_start)) => {
                if CLOSE_FENCE.is_match(content) {
                    regions.push(FenceRegion {
                        tag: tag.clone(),
                        body: *body_start..offset,
                    });
                    open = None;
                }
            }
        }

        offset = line_end;
    }

    regions
}

/// First region carrying `tag`, if any.
pub fn find(document: &str, tag: &str) -> Option<FenceRegion> {
    scan(document)
        .into_iter()
        .find(|region| region.tag.as_deref() == Some(tag))
}

/// Replace the body of the first region tagged `tag` with `new_body`.
///
/// The inserted body always ends with exactly one newline before the
/// closing marker, so repeating a substitution is byte-stable. When no
/// region carries the tag, the document comes back unchanged.
pub fn substitute(document: &str, tag: &str, new_body: &str) -> String {
    let region = match find(document, tag) {
        Some(region) => region,
        None => return document.to_string(),
    };

    let body = new_body.trim_end_matches('\n');
    let mut result = String::with_capacity(document.len() + body.len() + 1);
    result.push_str(&document[..region.body.start]);
    result.push_str(body);
    result.push('\n');
    result.push_str(&document[region.body.end..]);
    result
}
