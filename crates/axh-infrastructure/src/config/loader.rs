//! Configuration loader
//!
//! Merges defaults, an optional TOML file and `AXH_`-prefixed environment
//! variables with figment, then validates the result.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use axh_application::ports::registry::list_cache_providers;
use axh_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, else the first default location found)
    /// 3. Environment variables, nested with `__` (e.g. `AXH_CACHE__PROVIDER=redis`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::configuration(message)
}

/// Validate every configuration section
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_cache_config(config)?;
    validate_upstream_config(config)?;
    validate_throttle_config(config)?;
    validate_jobs_config(config)?;
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;
    let known = list_cache_providers();
    if !known.iter().any(|(name, _)| *name == cache.provider) {
        let names: Vec<&str> = known.iter().map(|(name, _)| *name).collect();
        return Err(invalid(format!(
            "Unknown cache provider '{}'. Available providers: {:?}",
            cache.provider, names
        )));
    }
    if cache.provider == "redis" && cache.redis_url.as_deref().is_none_or(str::is_empty) {
        return Err(invalid(
            "cache.redis_url is required when the redis provider is selected",
        ));
    }
    if cache.max_capacity == 0 {
        return Err(invalid("Cache capacity cannot be 0"));
    }
    if cache.player_ttl_secs == 0 || cache.profile_ttl_secs == 0 {
        return Err(invalid("Player cache TTL cannot be 0"));
    }
    Ok(())
}

fn validate_upstream_config(config: &AppConfig) -> Result<()> {
    for (field, url) in config.upstream.endpoints() {
        if url.trim().is_empty() {
            return Err(invalid(format!("upstream.{} cannot be empty", field)));
        }
    }
    if config.upstream.timeout_secs == 0 {
        return Err(invalid("Upstream timeout cannot be 0"));
    }
    if config.upstream.max_pages == 0 {
        return Err(invalid("upstream.max_pages cannot be 0"));
    }
    Ok(())
}

fn validate_throttle_config(config: &AppConfig) -> Result<()> {
    for (name, limit) in [
        ("gateway", &config.throttle.gateway),
        ("marketplace", &config.throttle.marketplace),
    ] {
        if limit.limit == 0 {
            return Err(invalid(format!("throttle.{}.limit cannot be 0", name)));
        }
        if limit.interval_ms == 0 {
            return Err(invalid(format!(
                "throttle.{}.interval_ms cannot be 0",
                name
            )));
        }
    }
    Ok(())
}

fn validate_jobs_config(config: &AppConfig) -> Result<()> {
    let jobs = &config.jobs;
    if !jobs.price_refresh_enabled {
        return Ok(());
    }
    if jobs.price_refresh_cron.trim().is_empty() {
        return Err(invalid(
            "Price refresh schedule cannot be empty when the job is enabled",
        ));
    }
    if jobs.price_page_size == 0 || jobs.price_max_pages == 0 {
        return Err(invalid(
            "Price refresh paging cannot be 0 when the job is enabled",
        ));
    }
    if jobs.price_token_types.is_empty() {
        return Err(invalid(
            "Price refresh needs at least one token type when the job is enabled",
        ));
    }
    Ok(())
}
