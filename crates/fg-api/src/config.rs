use std::net::IpAddr;

use fg_gen::{GeneratorConfig, InferenceConfig, ProviderKind, config::DEFAULT_MODEL_URL};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment, controls log format and HSTS
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Process configuration, read once at startup and never mutated.
///
/// Every field maps to the upper-cased environment variable of the same name
/// (`DB_HOST`, `GENERATION_PROVIDER`, ...). `DATABASE_URL`, when set, takes
/// precedence over the individual `DB_*` parts.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "environment", default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    pub database_url: Option<String>,
    #[serde(default = "default_db_host")]
    pub db_host: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    #[serde(default = "default_db_user")]
    pub db_user: String,
    #[serde(default)]
    pub db_password: String,
    #[serde(default = "default_db_name")]
    pub db_name: String,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    #[serde(default)]
    pub generation_provider: ProviderKind,
    pub hf_api_token: Option<String>,
    #[serde(default = "default_hf_api_url")]
    pub hf_api_url: String,
    #[serde(default = "default_generation_max_pairs")]
    pub generation_max_pairs: usize,
    #[serde(default = "default_generation_min_score")]
    pub generation_min_score: f64,
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_db_host() -> String {
    "localhost".to_string()
}

const fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "flashcard_db".to_string()
}

const fn default_db_max_connections() -> u32 {
    10
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

const fn default_max_text_length() -> usize {
    10_000
}

fn default_hf_api_url() -> String {
    DEFAULT_MODEL_URL.to_string()
}

const fn default_generation_max_pairs() -> usize {
    5
}

const fn default_generation_min_score() -> f64 {
    0.1
}

const fn default_generation_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Build from explicit key/value pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_text_length == 0 {
            return Err(ConfigError::Invalid(
                "MAX_TEXT_LENGTH must be greater than 0".to_string(),
            ));
        }
        if self.generation_max_pairs == 0 {
            return Err(ConfigError::Invalid(
                "GENERATION_MAX_PAIRS must be greater than 0".to_string(),
            ));
        }
        if self.generation_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "GENERATION_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.generation_min_score) {
            return Err(ConfigError::Invalid(
                "GENERATION_MIN_SCORE must be between 0 and 1".to_string(),
            ));
        }
        if self.generation_provider == ProviderKind::Inference
            && self
                .hf_api_token
                .as_deref()
                .is_none_or(|token| token.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "HF_API_TOKEN must be set when GENERATION_PROVIDER=inference".to_string(),
            ));
        }
        self.database_url()?;
        Ok(())
    }

    /// Connection string for the flashcard database.
    ///
    /// `DATABASE_URL` is used as given. Otherwise the `DB_*` parts are
    /// assembled with [`Url`], so IPv6 hosts are bracketed and the
    /// credentials and database name are percent-encoded.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let unusable = |var: &str| ConfigError::Invalid(format!("{var} is not valid in a database URL"));

        if self.db_host.trim().is_empty() {
            return Err(ConfigError::Invalid("DB_HOST must not be empty".to_string()));
        }
        if self.db_name.trim().is_empty() {
            return Err(ConfigError::Invalid("DB_NAME must not be empty".to_string()));
        }

        let mut url = Url::parse("postgres://localhost/")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        match self.db_host.parse::<IpAddr>() {
            Ok(ip) => url.set_ip_host(ip).map_err(|()| unusable("DB_HOST"))?,
            Err(_) => url
                .set_host(Some(&self.db_host))
                .map_err(|_| unusable("DB_HOST"))?,
        }
        url.set_port(Some(self.db_port))
            .map_err(|()| unusable("DB_PORT"))?;
        url.set_username(&self.db_user)
            .map_err(|()| unusable("DB_USER"))?;
        if !self.db_password.is_empty() {
            url.set_password(Some(&self.db_password))
                .map_err(|()| unusable("DB_PASSWORD"))?;
        }
        url.path_segments_mut()
            .map_err(|()| unusable("DB_NAME"))?
            .clear()
            .push(&self.db_name);

        Ok(url.into())
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            provider: self.generation_provider,
            inference: InferenceConfig {
                api_url: self.hf_api_url.clone(),
                api_token: self.hf_api_token.clone(),
                max_pairs: self.generation_max_pairs,
                min_score: self.generation_min_score,
                timeout_secs: self.generation_timeout_secs,
                ..InferenceConfig::default()
            },
        }
    }
}
