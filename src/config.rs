use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_NOTE: &str = "Farmland Inquiry";

/// Settings for the lead form and the page around it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeadFormConfig {
    /// Origin of the lead API. `None` means "same origin as the page".
    pub api_base: Option<String>,
    /// Sent as `company` when the visitor leaves no note.
    pub default_note: String,
    pub notification_ttl_ms: u32,
    pub carousel_interval_ms: u32,
    pub sticky_cta_threshold_px: f64,
    pub header_solid_threshold_px: f64,
}

impl Default for LeadFormConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            default_note: DEFAULT_NOTE.to_string(),
            notification_ttl_ms: 3_000,
            carousel_interval_ms: 3_000,
            sticky_cta_threshold_px: 600.0,
            header_solid_threshold_px: 50.0,
        }
    }
}

impl LeadFormConfig {
    /// Defaults, with `api_base` taken from `VISTA_API_BASE` at build time.
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("VISTA_API_BASE")
                .filter(|base| !base.trim().is_empty())
                .map(str::to_owned),
            ..Self::default()
        }
    }

    /// Parse and check a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base) = &self.api_base {
            parse_origin(base)?;
        }
        if self.notification_ttl_ms == 0 {
            return Err(ConfigError::Zero("notification_ttl_ms"));
        }
        if self.carousel_interval_ms == 0 {
            return Err(ConfigError::Zero("carousel_interval_ms"));
        }
        Ok(())
    }

    /// The configured origin, or `fallback` when none is set.
    pub fn api_base_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.api_base.as_deref().unwrap_or(fallback)
    }
}

pub(crate) fn parse_origin(base: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base).map_err(|source| ConfigError::InvalidApiBase {
        value: base.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(base.to_string())),
    }
}
