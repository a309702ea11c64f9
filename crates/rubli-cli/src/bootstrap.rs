use anyhow::Context;
use rubli_config::RubliConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, extract layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RubliConfig> {
    dotenvy::dotenv().ok();

    let mut config = RubliConfig::load().context("failed to load configuration")?;
    apply_server_override(&mut config, flags.server.as_deref())?;
    Ok(config)
}

/// `--server` replaces `api.base_url`; the result is validated again.
pub fn apply_server_override(config: &mut RubliConfig, server: Option<&str>) -> anyhow::Result<()> {
    let Some(server) = server.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    config.api.base_url = server.to_string();
    config
        .api
        .validate()
        .with_context(|| format!("invalid --server value '{server}'"))?;
    tracing::debug!(base_url = %config.api.base_url, "api server overridden");
    Ok(())
}
