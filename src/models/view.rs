use serde::Serialize;

use super::gif::Gif;

/// Everything one handled submission hands to the renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchView {
    pub search_term: String,
    pub gifs: Vec<Gif>,
    /// Distinct past search terms for the identity, first occurrence kept.
    pub history: Vec<String>,
}
