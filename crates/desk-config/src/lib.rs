//! # desk-config
//!
//! Layered configuration loading for Frontdesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FRONTDESK_*` prefix, `__` as separator)
//! 2. Project-level `.frontdesk/config.toml`
//! 3. User-level `~/.config/frontdesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FRONTDESK_API__BASE_URL` -> `api.base_url`,
//! `FRONTDESK_REFRESH__INTERVAL_SECS` -> `refresh.interval_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("Backend: {}", config.api.base_url);
//! }
//! ```

mod api;
mod endpoints;
mod error;
mod reconcile;
mod refresh;
mod session;

pub use api::ApiConfig;
pub use endpoints::EndpointsConfig;
pub use error::ConfigError;
pub use reconcile::ReconcileConfig;
pub use refresh::RefreshConfig;
pub use session::SessionConfig;

use desk_core::session::SessionContext;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".frontdesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FRONTDESK_").split("__"))
    }

    /// Reject values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero feed limit or a base
    /// URL without an `http(s)://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.feed_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh.feed_limit".into(),
                reason: "must be at least 1".into(),
            });
        }

        let base = self.api.base_url.trim();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base}' must start with http:// or https://"),
            });
        }

        Ok(())
    }

    /// Session context for a cycle. An explicit hotel wins over the configured one.
    #[must_use]
    pub fn session_context(&self, hotel_override: Option<&str>) -> SessionContext {
        let hotel = hotel_override
            .map(str::to_string)
            .or_else(|| Some(self.session.hotel_id.clone()));
        SessionContext::new(hotel, Some(self.api.token.clone()))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("frontdesk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DeskConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.refresh.interval_secs, 30);
        assert!(config.session.hotel_id.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = DeskConfig::figment();
        let config: DeskConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.refresh.feed_limit, 50);
        assert_eq!(config.endpoints.rooms, "/rooms");
    }

    #[test]
    fn validate_rejects_zero_feed_limit() {
        let mut config = DeskConfig::default();
        config.refresh.feed_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "refresh.feed_limit"
        ));
    }

    #[test]
    fn validate_rejects_schemeless_base_url() {
        let mut config = DeskConfig::default();
        config.api.base_url = "api.hotel.example".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn session_context_prefers_override() {
        let mut config = DeskConfig::default();
        config.session.hotel_id = "h-config".into();
        config.api.token = "tok".into();

        let ctx = config.session_context(Some("h-cli"));
        assert_eq!(ctx.hotel_id.as_deref(), Some("h-cli"));
        assert_eq!(ctx.token.as_deref(), Some("tok"));

        let ctx = config.session_context(None);
        assert_eq!(ctx.hotel_id.as_deref(), Some("h-config"));
    }

    #[test]
    fn session_context_without_hotel_is_unscoped() {
        let ctx = DeskConfig::default().session_context(None);
        assert!(ctx.hotel_id.is_none());
        assert!(ctx.token.is_none());
    }
}
