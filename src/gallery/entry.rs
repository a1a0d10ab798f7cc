/// Thumbnail entry derivation
///
/// Turns a thumbnail filename into the pair of slash-normalized links
/// (thumbnail, full resolution) that the markup is built from.

use std::path::Path;

/// Image extensions picked up from the thumbnail directory (compared lowercase)
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

/// Suffix carried by thumbnails but not by their full-resolution originals
pub const CUSTOM_SUFFIX: &str = " (Custom)";

/// A thumbnail and the full-resolution image it links to
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailEntry {
    /// Filename as listed (e.g., "sphere (Custom).png")
    pub filename: String,
    /// Full-resolution filename without extension, also used as the label
    pub full_resolution_base: String,
    /// `<thumbnails prefix>/<filename>`
    pub thumbnail_path: String,
    /// `<full resolution prefix>/<full_resolution_base>.<original extension>`
    pub full_resolution_path: String,
}

impl ThumbnailEntry {
    /// Derive an entry from a filename.
    /// Returns None if the file is not a recognized image.
    pub fn from_filename(
        filename: &str,
        thumbnails_prefix: &str,
        full_resolution_prefix: &str,
    ) -> Option<Self> {
        let extension = image_extension(filename)?;

        let base_name = &filename[..filename.len() - extension.len() - 1];
        let full_resolution_base = base_name.replacen(CUSTOM_SUFFIX, "", 1);

        let thumbnail_path = join_slash(thumbnails_prefix, filename);
        let full_resolution_path = join_slash(
            full_resolution_prefix,
            &format!("{}.{}", full_resolution_base, extension),
        );

        Some(Self {
            filename: filename.to_string(),
            full_resolution_base,
            thumbnail_path,
            full_resolution_path,
        })
    }
}

/// Extension (without dot, original case) if it is a recognized image type
fn image_extension(filename: &str) -> Option<&str> {
    let extension = Path::new(filename).extension()?.to_str()?;
    let lower = extension.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&lower.as_str()) {
        Some(extension)
    } else {
        None
    }
}

/// Join a directory prefix and a filename with forward slashes only
pub fn join_slash(prefix: &str, name: &str) -> String {
    let prefix = prefix.replace('\\', "/");
    let prefix = prefix.trim_end_matches('/');
    let name = name.replace('\\', "/");

    if prefix.is_empty() {
        name
    } else {
        format!("{}/{}", prefix, name)
    }
}
