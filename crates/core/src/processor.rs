//! Per-file pipeline: split, filter, generate, merge, rewrite.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::SeoError;
use crate::frontmatter::{self, render_document};
use crate::metadata::{Metadata, MetadataProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Compute the new content but leave files untouched.
    pub dry_run: bool,
}

/// Outcome for one successfully processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub path: PathBuf,
    pub metadata: Metadata,
    /// False for dry runs.
    pub written: bool,
}

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub files: Vec<ProcessedFile>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.files.len()
    }

    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }
}

/// Runs the metadata pipeline over documents.
///
/// Holds one provider for the whole batch and processes files strictly one
/// after another.
pub struct DocumentProcessor<P> {
    provider: P,
    options: ProcessOptions,
}

impl<P: MetadataProvider> DocumentProcessor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, options: ProcessOptions::default() }
    }

    pub fn with_options(mut self, options: ProcessOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Produce the rewritten file content for raw document text.
    ///
    /// Front matter is parsed before the backend is asked, so broken TOML
    /// never costs a request.
    pub fn render(&self, raw: &str) -> Result<(String, Metadata), SeoError> {
        let doc = Document::parse(raw);
        let table = frontmatter::parse(&doc.front_matter_raw)?;
        let metadata = self.provider.metadata(&doc.seo_view)?;
        let merged = frontmatter::merge(table, &metadata)?;
        let content = render_document(&merged, &doc.body)?;
        Ok((content, metadata))
    }

    /// Process one file in place.
    ///
    /// The file is only replaced after every step succeeded; on any error it
    /// is left as it was.
    pub fn process_file(&self, path: &Path) -> Result<ProcessedFile, SeoError> {
        tracing::info!(path = %path.display(), "processing file");

        let raw = fs::read_to_string(path).map_err(|e| SeoError::io(path, e))?;
        let (content, metadata) = self.render(&raw)?;

        let written = if self.options.dry_run {
            tracing::info!(path = %path.display(), "dry run, not writing");
            false
        } else {
            write_atomic(path, content.as_bytes())?;
            true
        };

        tracing::debug!(
            path = %path.display(),
            description = %metadata.description,
            keywords = ?metadata.keywords,
            "front matter updated"
        );

        Ok(ProcessedFile { path: path.to_path_buf(), metadata, written })
    }

    /// Process a sequence of paths, stopping at the first failure.
    pub fn process_all<I, E>(&self, paths: I) -> Result<BatchSummary, SeoError>
    where
        I: IntoIterator<Item = Result<PathBuf, E>>,
        SeoError: From<E>,
    {
        let mut summary = BatchSummary::default();
        for path in paths {
            let path = path?;
            let processed = self.process_file(&path).map_err(|e| SeoError::InFile {
                path: path.clone(),
                source: Box::new(e),
            })?;
            summary.files.push(processed);
        }
        Ok(summary)
    }
}

/// Replace `path` with `bytes` via a sibling temp file and a rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SeoError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = parent.join(format!(
        ".{}.tmp-{}",
        path.file_name().and_then(|s| s.to_str()).unwrap_or("page"),
        std::process::id()
    ));

    let result = (|| {
        let permissions = fs::metadata(path)?.permissions();
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::set_permissions(&tmp, permissions)?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(SeoError::io(path, e));
    }
    Ok(())
}
