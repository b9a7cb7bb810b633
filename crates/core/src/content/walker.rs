//! Recursive content directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Section index files, never rewritten.
pub const INDEX_FILE_NAME: &str = "_index.md";

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("content folder does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk content folder {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering markdown pages under a content folder.
#[derive(Debug)]
pub struct ContentWalker {
    root: PathBuf,
}

impl ContentWalker {
    /// Create a new walker for the given content folder.
    pub fn new(root: &Path) -> Result<Self, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::MissingRoot(root.display().to_string()));
        }
        Ok(Self { root: root.to_path_buf() })
    }

    /// Lazily yield every `.md` file except section indexes.
    ///
    /// Entries come in walk order with siblings sorted by name. Calling this
    /// again starts a fresh walk.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, WalkError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let keep = entry.file_type().is_file() && is_candidate(entry.path());
                    keep.then(|| Ok(entry.into_path()))
                }
                Err(e) => Some(Err(WalkError::WalkError(self.root.display().to_string(), e))),
            })
    }

    /// Get the content root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_candidate(path: &Path) -> bool {
    let is_markdown = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md");
    let is_index = path.file_name().and_then(|n| n.to_str()) == Some(INDEX_FILE_NAME);
    is_markdown && !is_index
}
