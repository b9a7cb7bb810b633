//! Error taxonomy for the document pipeline.

use std::path::PathBuf;
use thiserror::Error;

use crate::content::WalkError;
use crate::frontmatter::{FrontMatterError, SchemaError};
use crate::metadata::MetadataError;

/// Any failure while processing documents. Every variant aborts the batch.
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Failure attributed to a file within a batch.
    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<SeoError>,
    },
}

impl SeoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// The error without any batch context.
    pub fn root(&self) -> &SeoError {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}
