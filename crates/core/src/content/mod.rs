//! Discovery of candidate content files.

pub mod walker;

pub use walker::{ContentWalker, INDEX_FILE_NAME, WalkError};
