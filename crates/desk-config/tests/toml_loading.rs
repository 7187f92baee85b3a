//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use desk_config::DeskConfig;
use desk_core::enums::TiePolicy;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.hotel.example/v1"
token = "desk-token"
timeout_secs = 5
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.hotel.example/v1");
        assert_eq!(config.api.token, "desk-token");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent, "frontdesk/0.1");
        assert!(config.api.is_configured());
        Ok(())
    });
}

#[test]
fn loads_endpoint_overrides_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[endpoints]
room_service = "/services/requests"
feedback = "/guest-feedback"
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.endpoints.room_service, "/services/requests");
        assert_eq!(config.endpoints.feedback, "/guest-feedback");
        assert_eq!(config.endpoints.rooms, "/rooms");
        Ok(())
    });
}

#[test]
fn loads_reconcile_policy_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[reconcile]
tie_policy = "earlier_wins"
default_established_year = 1990

[refresh]
interval_secs = 5
feed_limit = 10
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.reconcile.tie_policy, TiePolicy::EarlierWins);
        assert_eq!(config.reconcile.default_established_year, 1990);
        assert_eq!(config.refresh.interval_secs, 5);
        assert_eq!(config.refresh.feed_limit, 10);
        Ok(())
    });
}

#[test]
fn unknown_tie_policy_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[reconcile]
tie_policy = "coin_flip"
"#,
        )?;

        let result: Result<DeskConfig, _> =
            Figment::from(Serialized::defaults(DeskConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".frontdesk")?;
        jail.create_file(
            ".frontdesk/config.toml",
            r#"
[session]
hotel_id = "h-42"
"#,
        )?;

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.session.hotel_id, "h-42");
        Ok(())
    });
}
