use figment::Jail;
use duna_config::DunaConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("DUNA_STORAGE__STATE_DIR", "/tmp/duna-env");
        jail.set_env("DUNA_GENERAL__HISTORY_DAYS", "30");
        jail.set_env("DUNA_API__TIMEOUT_SECS", "12");

        let config = DunaConfig::load().expect("config loads");
        assert_eq!(config.storage.state_dir, "/tmp/duna-env");
        assert_eq!(config.general.history_days, 30);
        assert_eq!(config.api.timeout_secs, 12);
        Ok(())
    });
}

#[test]
fn unprefixed_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("API__BASE_URL", "http://ignored");
        let config = DunaConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        Ok(())
    });
}
