use std::process::ExitCode;
use tracing::Level;

mod config;
mod error;
mod gallery;

use config::GalleryConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = GalleryConfig::default();

    match gallery::run(&config).await {
        Ok(report) => {
            if report.changed {
                println!(
                    "✅ {} updated with {} thumbnails linking to full resolution!",
                    config.readme_path.display(),
                    report.inserted
                );
            } else {
                println!(
                    "✅ {} already up to date ({} thumbnails)",
                    config.readme_path.display(),
                    report.inserted
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Failed to generate thumbnails: {}", e);
            if let error::GalleryError::MissingMarker { .. } = e {
                eprintln!(
                    "   Please ensure '{}' and '{}' are present in {}.",
                    config.start_marker,
                    config.end_marker,
                    config.readme_path.display()
                );
            }
            ExitCode::FAILURE
        }
    }
}
