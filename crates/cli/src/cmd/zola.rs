//! Zola command implementation.

use std::path::Path;

use seo_helper_core::config::ConfigLoader;
use seo_helper_core::content::ContentWalker;
use seo_helper_core::metadata::{ArkBackend, LlmMetadataProvider};
use seo_helper_core::{BatchSummary, DocumentProcessor, ProcessOptions, SeoError};

use crate::logging;

/// Run the zola command on one file or a whole content folder.
pub fn run(
    config: Option<&Path>,
    file_path: Option<&Path>,
    content_folder: Option<&Path>,
    dry_run: bool,
) {
    // Configuration must be complete before any file is touched
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let _log_guard = match logging::init(&rc.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to open log file: {e}");
            std::process::exit(1);
        }
    };

    let provider = LlmMetadataProvider::new(ArkBackend::new(&rc.provider));
    let processor =
        DocumentProcessor::new(provider).with_options(ProcessOptions { dry_run });

    let result = match (file_path, content_folder) {
        (Some(file), _) => {
            processor.process_file(file).map(|f| BatchSummary { files: vec![f] })
        }
        (None, Some(folder)) => ContentWalker::new(folder)
            .map_err(SeoError::from)
            .and_then(|walker| processor.process_all(walker.walk())),
        (None, None) => {
            eprintln!("either --file-path or --content-folder is required");
            std::process::exit(2);
        }
    };

    match result {
        Ok(summary) => {
            for file in &summary.files {
                if file.written {
                    println!("updated {}", file.path.display());
                } else {
                    println!("would update {}", file.path.display());
                    println!("  description: {}", file.metadata.description);
                    println!("  keywords:    {}", file.metadata.keywords.join(","));
                }
            }
            println!("Processed {} file(s), wrote {}", summary.processed(), summary.written());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
