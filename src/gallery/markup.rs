/// HTML markup for the thumbnail gallery
///
/// Each entry becomes a clickable thumbnail: an `<a>` pointing at the
/// full-resolution image wrapping an `<img>` of the thumbnail.

use super::entry::ThumbnailEntry;
use crate::config::MarkupStyle;

/// Query suffix that makes the hosting platform serve the raw file
pub const RAW_QUERY: &str = "?raw=true";

const ANCHOR_STYLE: &str = "display: inline-block; text-decoration: none;";
const IMAGE_STYLE: &str = "border: 1px solid #ddd; border-radius: 4px; \
    box-shadow: 2px 2px 5px rgba(0,0,0,0.2); max-width: 100%; height: auto;";

/// Render one entry as an anchor/image pair
pub fn render_fragment(entry: &ThumbnailEntry, style: &MarkupStyle) -> String {
    format!(
        "<a href=\"{href}{raw}\" target={target} style=\"{anchor_style}\">\
         <img src=\"{src}{raw}\" alt=\"Thumbnail of {label}\" width=\"{width}\" style=\"{image_style}\">\
         </a>",
        href = escape_attr(&entry.full_resolution_path),
        src = escape_attr(&entry.thumbnail_path),
        raw = RAW_QUERY,
        target = escape_attr(&style.link_target),
        anchor_style = ANCHOR_STYLE,
        label = escape_attr(&entry.full_resolution_base),
        width = style.thumbnail_width,
        image_style = IMAGE_STYLE,
    )
}

/// Render every entry in order, joined by the style's separator
pub fn render_gallery(entries: &[ThumbnailEntry], style: &MarkupStyle) -> String {
    entries
        .iter()
        .map(|entry| render_fragment(entry, style))
        .collect::<Vec<_>>()
        .join(&style.separator)
}

/// Escape characters that would end or corrupt a quoted attribute value
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
