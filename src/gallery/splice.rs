/// Marker-delimited region replacement
///
/// Only the text strictly between the end of the start marker and the
/// beginning of the end marker is ever replaced.

use crate::error::{GalleryError, Result};

/// Byte offsets of the replaceable region within a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// First byte after the start marker
    pub start: usize,
    /// First byte of the end marker
    pub end: usize,
}

/// Locate the replaceable region using the first occurrence of each marker
pub fn find_region(document: &str, start_marker: &str, end_marker: &str) -> Result<Region> {
    let start_index = find_marker(document, start_marker)?;
    let end_index = find_marker(document, end_marker)?;

    let start = start_index + start_marker.len();
    if end_index < start {
        return Err(GalleryError::MalformedDocument {
            start: start_index,
            end: end_index,
        });
    }

    Ok(Region { start, end: end_index })
}

/// Replace the region between the markers with `content`, framed by newlines
pub fn splice(document: &str, start_marker: &str, end_marker: &str, content: &str) -> Result<String> {
    let region = find_region(document, start_marker, end_marker)?;

    let before = &document[..region.start];
    let after = &document[region.end..];

    let mut output = String::with_capacity(before.len() + content.len() + after.len() + 2);
    output.push_str(before);
    output.push('\n');
    output.push_str(content);
    output.push('\n');
    output.push_str(after);
    Ok(output)
}

fn find_marker(document: &str, marker: &str) -> Result<usize> {
    // "".find() would match at offset 0
    if marker.is_empty() {
        return Err(GalleryError::MissingMarker { marker: String::new() });
    }

    document
        .find(marker)
        .ok_or_else(|| GalleryError::MissingMarker { marker: marker.to_string() })
}
