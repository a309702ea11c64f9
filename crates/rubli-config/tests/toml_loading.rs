//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use rubli_config::{ConfigError, RubliConfig};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://rubli.example"
base_path = "/api/v2"
timeout_secs = 10
"#,
        )?;

        let config: RubliConfig = Figment::from(Serialized::defaults(RubliConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.api_root(), "https://rubli.example/api/v2");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.user_agent, "rubli/0.1");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rubli")?;
        jail.create_file(
            ".rubli/config.toml",
            r"
[general]
top_n = 10
label_width = 20
",
        )?;

        let config = RubliConfig::load().expect("config loads");
        assert_eq!(config.general.top_n, 10);
        assert_eq!(config.general.label_width, 20);
        assert_eq!(config.general.per_page, 50);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rubli")?;
        jail.create_file(
            ".rubli/config.toml",
            r#"
[api]
base_url = "http://from-toml:8001"
"#,
        )?;
        jail.set_env("RUBLI_API__BASE_URL", "http://from-env:9000");

        let config = RubliConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env:9000");
        Ok(())
    });
}

#[test]
fn env_double_underscore_maps_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("RUBLI_GENERAL__PER_PAGE", "25");
        jail.set_env("RUBLI_API__TIMEOUT_SECS", "5");

        let config: RubliConfig = Figment::from(Serialized::defaults(RubliConfig::default()))
            .merge(Env::prefixed("RUBLI_").split("__"))
            .extract()?;

        assert_eq!(config.general.per_page, 25);
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("RUBLI_API__BASE_URL", "ftp://nope");

        let err = RubliConfig::load().expect_err("non-http url should fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_value_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("RUBLI_GENERAL__TOP_N", "lots");

        let err = RubliConfig::load().expect_err("non-numeric top_n should fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
