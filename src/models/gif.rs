use serde::{Deserialize, Serialize};

/// One provider result reduced to what the page renders. Built per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    /// Provider-supplied content hash.
    pub id: String,
    /// URL of the webp rendition.
    pub url: String,
}
