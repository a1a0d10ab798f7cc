/// Gallery configuration
///
/// There is no config file and no command line: every setting lives in
/// the constants below and `GalleryConfig::default()` picks them up.

use std::path::PathBuf;

/// README that receives the gallery
pub const README_PATH: &str = "README.md";

/// Directory containing thumbnails (also used as the link prefix)
pub const THUMBNAILS_DIR: &str = "screensaver.shadertoy/Shader-Screens/thumbnails";

/// Directory containing full-resolution images (link prefix only, never read)
pub const FULL_RESOLUTION_DIR: &str = "screensaver.shadertoy/Shader-Screens";

pub const START_MARKER: &str = "<!-- THUMBNAIL_START -->";
pub const END_MARKER: &str = "<!-- THUMBNAIL_END -->";

/// Two non-breaking spaces between thumbnails
pub const FRAGMENT_SEPARATOR: &str = "&nbsp;&nbsp;";

/// Rendered thumbnail width in pixels
pub const THUMBNAIL_WIDTH: u32 = 128;

/// Named browsing context the full-resolution links open in
pub const LINK_TARGET: &str = "ShaderPreview";

/// Presentation settings for the generated markup
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupStyle {
    /// Inserted between consecutive fragments
    pub separator: String,
    /// `width` attribute of each thumbnail `<img>`
    pub thumbnail_width: u32,
    /// `target` attribute of each anchor
    pub link_target: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            separator: FRAGMENT_SEPARATOR.to_string(),
            thumbnail_width: THUMBNAIL_WIDTH,
            link_target: LINK_TARGET.to_string(),
        }
    }
}

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Document rewritten in place
    pub readme_path: PathBuf,
    /// Directory that is listed for thumbnails
    pub thumbnails_dir: PathBuf,
    /// Prefix written into thumbnail links
    pub thumbnails_prefix: String,
    /// Prefix written into full-resolution links
    pub full_resolution_prefix: String,
    pub start_marker: String,
    pub end_marker: String,
    pub style: MarkupStyle,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from(README_PATH),
            thumbnails_dir: PathBuf::from(THUMBNAILS_DIR),
            thumbnails_prefix: THUMBNAILS_DIR.to_string(),
            full_resolution_prefix: FULL_RESOLUTION_DIR.to_string(),
            start_marker: START_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
            style: MarkupStyle::default(),
        }
    }
}
