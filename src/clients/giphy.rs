use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::models::Gif;

const GIPHY_API: &str = "https://api.giphy.com/v1";

#[derive(Debug, Deserialize)]
pub struct SearchGifResponse {
    pub data: Vec<GifEntry>,
    /// Present in every response but not used; there is no pagination
    /// support.
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total_count: Option<u64>,
    pub count: Option<u32>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct GifEntry {
    pub images: GifImages,
}

#[derive(Debug, Deserialize)]
pub struct GifImages {
    pub original: OriginalRendition,
}

#[derive(Debug, Deserialize)]
pub struct OriginalRendition {
    pub webp: String,
    pub hash: String,
}

#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
    limit: u32,
}

impl GiphyClient {
    #[must_use]
    pub fn new(api_key: &str, limit: u32) -> Self {
        Self::with_shared_client(Client::new(), api_key, limit)
    }

    #[must_use]
    pub fn with_shared_client(client: Client, api_key: &str, limit: u32) -> Self {
        Self {
            client,
            base_url: GIPHY_API.to_string(),
            api_key: api_key.to_string(),
            limit,
        }
    }

    /// Points the client at a different endpoint (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Gif>> {
        let url = format!(
            "{}/gifs/search?q={}&api_key={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            self.api_key,
            self.limit
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Giphy API error: {} - {}", status, body));
        }

        let response: SearchGifResponse = response.json().await?;

        Ok(response
            .data
            .into_iter()
            .map(|gif| Gif {
                id: gif.images.original.hash,
                url: gif.images.original.webp,
            })
            .collect())
    }
}
