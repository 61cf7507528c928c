//! Orchestrates one form submission: provider call, history write, history
//! read-back.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::clients::giphy::GiphyClient;
use crate::db::Store;
use crate::models::{Gif, SearchView};

/// Errors a submission can end in. The handler matches on these explicitly;
/// nothing propagates silently.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("GIF provider error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Persistence(String),
}

impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

pub struct SearchService {
    store: Store,
    giphy: Arc<GiphyClient>,
}

impl SearchService {
    #[must_use]
    pub const fn new(store: Store, giphy: Arc<GiphyClient>) -> Self {
        Self { store, giphy }
    }

    /// Search branch. The provider call happens first, so a provider failure
    /// aborts before anything is persisted; the save happens before the
    /// history read, so the just-submitted term is part of the returned
    /// history.
    pub async fn search(&self, user_id: &str, term: &str) -> Result<SearchView, SearchError> {
        let gifs: Vec<Gif> = self
            .giphy
            .search(term)
            .await
            .map_err(|e| SearchError::Upstream(e.to_string()))?;

        self.store.save_search(user_id, term).await?;

        let history = self
            .store
            .get_history(user_id)
            .await?
            .into_iter()
            .map(|record| record.search_term)
            .collect();

        info!("Search for '{}' returned {} gif(s)", term, gifs.len());

        Ok(SearchView {
            search_term: term.to_string(),
            gifs,
            history,
        })
    }

    /// Delete-history branch: clears the whole identity's history, not just
    /// the echoed term. The term only survives for display continuity.
    pub async fn delete_history(
        &self,
        user_id: &str,
        echo_term: &str,
    ) -> Result<SearchView, SearchError> {
        let deleted = self.store.delete_searches(user_id).await?;

        if deleted > 0 {
            info!("Deleted {} history record(s)", deleted);
        }

        Ok(SearchView {
            search_term: echo_term.to_string(),
            gifs: Vec::new(),
            history: Vec::new(),
        })
    }
}
