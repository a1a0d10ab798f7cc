/// Gallery splicer
///
/// This module handles:
/// - Listing thumbnails (scan.rs)
/// - Deriving full-resolution links from thumbnail names (entry.rs)
/// - Rendering the gallery markup (markup.rs)
/// - Replacing the marked region of the README (splice.rs)

pub mod entry;
pub mod markup;
pub mod scan;
pub mod splice;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use entry::ThumbnailEntry;
use tracing::{debug, info};

/// Result of a gallery run
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryReport {
    /// Thumbnails written into the document
    pub inserted: usize,
    /// Files that are not recognized images
    pub skipped: usize,
    /// False if the document already held this exact gallery
    pub changed: bool,
}

/// Read the README, rebuild the gallery and write the README back.
///
/// The write is the last step: on any error the document is left untouched.
pub async fn run(config: &GalleryConfig) -> Result<GalleryReport> {
    let document = tokio::fs::read_to_string(&config.readme_path)
        .await
        .map_err(|source| GalleryError::ReadDocument {
            path: config.readme_path.clone(),
            source,
        })?;

    // Fail on bad markers before touching the thumbnail directory
    splice::find_region(&document, &config.start_marker, &config.end_marker)?;

    info!("🔍 Scanning thumbnails: {}", config.thumbnails_dir.display());
    let filenames = scan::list_thumbnails_async(config.thumbnails_dir.clone()).await?;

    let mut entries = Vec::with_capacity(filenames.len());
    let mut skipped = 0;
    for filename in &filenames {
        match ThumbnailEntry::from_filename(
            filename,
            &config.thumbnails_prefix,
            &config.full_resolution_prefix,
        ) {
            Some(entry) => {
                debug!("{} -> {}", entry.filename, entry.full_resolution_path);
                entries.push(entry);
            }
            None => {
                debug!("Skipping non-image file {}", filename);
                skipped += 1;
            }
        }
    }

    let gallery = markup::render_gallery(&entries, &config.style);
    let updated = splice::splice(&document, &config.start_marker, &config.end_marker, &gallery)?;
    let changed = updated != document;

    tokio::fs::write(&config.readme_path, &updated)
        .await
        .map_err(|source| GalleryError::WriteDocument {
            path: config.readme_path.clone(),
            source,
        })?;

    info!(
        "📝 Wrote {} thumbnails to {} ({} skipped)",
        entries.len(),
        config.readme_path.display(),
        skipped
    );

    Ok(GalleryReport {
        inserted: entries.len(),
        skipped,
        changed,
    })
}
