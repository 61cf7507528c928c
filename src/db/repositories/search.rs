use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::Gateway;
use crate::entities::user_search;

/// History repository. Every operation acquires the live handle from the
/// gateway first; failures surface to the caller without retries.
pub struct SearchRepository {
    gateway: Arc<Gateway>,
}

impl SearchRepository {
    #[must_use]
    pub const fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Inserts one history row and returns the created record. Duplicate
    /// terms per user are allowed here; the listing de-duplicates.
    pub async fn save(&self, user_id: &str, search_term: &str) -> Result<user_search::Model> {
        let conn = self.gateway.connect().await?;

        let record = user_search::ActiveModel {
            user_id: Set(user_id.to_string()),
            search_term: Set(search_term.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = record
            .insert(&conn)
            .await
            .context("Failed to insert search record")?;

        Ok(model)
    }

    /// Deletes every history row for `user_id`, returning the affected
    /// count. Zero when none exist.
    pub async fn delete_for_user(&self, user_id: &str) -> Result<u64> {
        let conn = self.gateway.connect().await?;

        let result = user_search::Entity::delete_many()
            .filter(user_search::Column::UserId.eq(user_id))
            .exec(&conn)
            .await
            .context("Failed to delete search records")?;

        Ok(result.rows_affected)
    }

    /// All history rows for `user_id`, de-duplicated by search term with the
    /// first occurrence kept (id order). An empty `user_id` short-circuits
    /// without touching the store.
    pub async fn history(&self, user_id: &str) -> Result<Vec<user_search::Model>> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.gateway.connect().await?;

        let rows = user_search::Entity::find()
            .filter(user_search::Column::UserId.eq(user_id))
            .order_by_asc(user_search::Column::Id)
            .all(&conn)
            .await
            .context("Failed to query search history")?;

        let mut seen = HashSet::new();
        Ok(rows
            .into_iter()
            .filter(|row| seen.insert(row.search_term.clone()))
            .collect())
    }

    /// Total stored rows across all identities.
    pub async fn count_all(&self) -> Result<u64> {
        let conn = self.gateway.connect().await?;

        let count = user_search::Entity::find()
            .count(&conn)
            .await
            .context("Failed to count search records")?;

        Ok(count)
    }
}
