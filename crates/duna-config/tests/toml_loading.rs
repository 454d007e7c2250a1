//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use duna_config::DunaConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://duna.example.com/api/v1/"
timeout_secs = 5
user_agent = "duna-test"
"#,
        )?;

        let config: DunaConfig = Figment::from(Serialized::defaults(DunaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://duna.example.com/api/v1/");
        assert_eq!(
            config.api.normalized_base_url(),
            "https://duna.example.com/api/v1"
        );
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent, "duna-test");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
pomodoro_minutes = 50
"#,
        )?;

        let config: DunaConfig = Figment::from(Serialized::defaults(DunaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.pomodoro_minutes, 50);
        assert_eq!(config.general.break_minutes, 5);
        assert_eq!(config.general.default_sort, "status");
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".duna")?;
        jail.create_file(
            ".duna/config.toml",
            r#"
[storage]
state_dir = "/tmp/duna-project-state"
"#,
        )?;

        let config = DunaConfig::load().expect("config loads");
        assert_eq!(config.storage.state_dir, "/tmp/duna-project-state");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:8000/api/v1"
"#,
        )?;
        jail.set_env("DUNA_API__BASE_URL", "http://from-env:8000/api/v1");

        let config: DunaConfig = Figment::from(Serialized::defaults(DunaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("DUNA_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://from-env:8000/api/v1");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("DUNA_API__BASE_URL", "localhost:8000");
        let err = DunaConfig::load().expect_err("should reject");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
