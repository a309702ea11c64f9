use anyhow::Context;
use rubli_client::ApiClient;
use rubli_config::RubliConfig;
use rubli_state::QueryCache;

/// Everything a command handler needs: the configured client, the query
/// cache, and the resolved configuration.
#[derive(Debug)]
pub struct AppContext {
    pub client: ApiClient,
    pub cache: QueryCache,
    pub config: RubliConfig,
}

impl AppContext {
    pub fn init(config: RubliConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build API client")?;
        tracing::debug!(root = client.root(), "api client ready");
        Ok(Self {
            client,
            cache: QueryCache::new(),
            config,
        })
    }
}
