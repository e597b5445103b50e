/// Runtime configuration: TOML file, then environment, then CLI overrides
use crate::domain::aggregates::Page;
use crate::domain::value_objects::PageId;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:6543";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WikiConfig {
    #[serde(default)]
    pub server: ServerSection,
    /// Pages the store starts with
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedPage>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// URL prefix for redirects and links; host-relative paths when unset
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedPage {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        WikiConfig {
            server: ServerSection::default(),
            seed: default_seed(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        ServerSection {
            bind: default_bind(),
            base_url: None,
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_seed() -> Vec<SeedPage> {
    ["100", "101", "102"]
        .iter()
        .map(|id| SeedPage {
            id: id.to_string(),
            title: format!("Page {}", id),
            body: format!("<em>{}</em>", id),
        })
        .collect()
}

impl WikiConfig {
    /// Load from `path` when given, otherwise start from defaults, then apply
    /// `WIKI_BIND` / `WIKI_BASE_URL` from the environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_str(&fs::read_to_string(path)?)?,
            None => WikiConfig::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if let Some(bind) = env_value("WIKI_BIND") {
            self.server.bind = bind;
        }
        if let Some(base_url) = env_value("WIKI_BASE_URL") {
            self.server.base_url = Some(base_url);
        }
    }

    /// Base URL for redirects and links.
    ///
    /// Empty when unset: redirects are then host-relative and resolve
    /// against the host the client used.
    pub fn base_url(&self) -> String {
        self.server.base_url.clone().unwrap_or_default()
    }

    /// Seed records as domain pages
    pub fn seed_pages(&self) -> ConfigResult<Vec<Page>> {
        self.seed
            .iter()
            .map(|seed| {
                let id = PageId::new(seed.id.clone())
                    .map_err(|e| ConfigError::InvalidValue(format!("seed page: {}", e)))?;
                Ok(Page::new(id, seed.title.clone(), seed.body.clone()))
            })
            .collect()
    }
}

fn env_value(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
