//! Configuration handling for the quote client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default API origin (the site's dev server)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default number shown next to confirmations and failures
pub const DEFAULT_SUPPORT_PHONE: &str = "+1 (800) 555-0199";

/// Environment override for the API origin
pub const API_URL_ENV: &str = "CETHOS_API_URL";

/// Color scheme for the branded header and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Call to action shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CtaType {
    #[default]
    Quote,
    Contact,
}

/// Options for the branded header and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub theme: Theme,
    pub cta: CtaType,
    /// Hide navigation and show only the logo and CTA
    pub minimal: bool,
    pub show_industries: bool,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            cta: CtaType::default(),
            minimal: false,
            show_industries: true,
        }
    }
}

/// User configuration for the quote client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteConfig {
    /// Origin of the quote API
    pub api_base_url: Option<String>,
    /// Phone number offered as a fallback contact
    pub support_phone: Option<String>,
    /// Per-request timeout; no timeout when unset
    pub request_timeout_secs: Option<u64>,
    /// Header/footer appearance
    #[serde(default)]
    pub brand: BrandConfig,
}

impl QuoteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "cethos", "cethos-quote")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: QuoteConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, writing the defaults out on first run so users
    /// have a file to edit
    pub fn load_or_init() -> Result<Self> {
        let exists = Self::config_path().is_some_and(|p| p.exists());
        let config = Self::load()?;
        if !exists {
            if let Err(e) = config.save() {
                tracing::warn!(error = %e, "could not write default config");
            }
        }
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// API origin: environment, then file, then default
    pub fn api_base_url(&self) -> String {
        Self::resolve_base_url(std::env::var(API_URL_ENV).ok(), self.api_base_url.as_deref())
    }

    fn resolve_base_url(env: Option<String>, file: Option<&str>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| file.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn support_phone(&self) -> &str {
        self.support_phone.as_deref().unwrap_or(DEFAULT_SUPPORT_PHONE)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
