use std::sync::Arc;

use crate::clients::giphy::GiphyClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::SearchService;

/// Identity shared by every client of this process. Generated once at
/// startup; stands in for a real per-user session.
#[derive(Debug, Clone)]
pub struct ProcessIdentity(String);

impl ProcessIdentity {
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build a shared HTTP client with reasonable defaults for API calls,
/// reused across HTTP-based services for connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("Gifarr/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub giphy: Arc<GiphyClient>,

    pub search_service: Arc<SearchService>,

    pub identity: ProcessIdentity,
}

impl SharedState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        );

        let http_client = build_shared_http_client(config.giphy.request_timeout_seconds.into())?;

        let giphy = Arc::new(
            GiphyClient::with_shared_client(
                http_client,
                &config.giphy.api_key,
                config.giphy.result_limit,
            )
            .with_base_url(&config.giphy.base_url),
        );

        let search_service = Arc::new(SearchService::new(store.clone(), giphy.clone()));

        Ok(Self {
            config,
            store,
            giphy,
            search_service,
            identity: ProcessIdentity::generate(),
        })
    }
}
