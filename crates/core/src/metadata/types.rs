use serde::{Deserialize, Serialize};

/// Generated SEO metadata for one document.
///
/// The backend is asked for 2 to 8 distinct keywords without symbol-only
/// entries; none of that is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Short summary of the document.
    pub description: String,
    /// Keywords in the order the backend produced them.
    pub keywords: Vec<String>,
}
