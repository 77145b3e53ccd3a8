use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::normalizer::{DEFAULT_TITLE, PayloadNormalizer};

const ENV_PREFIX: &str = "PUSH_BRIDGE_";

#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_title")]
    pub default_title: String,

    #[serde(default)]
    pub default_body: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            default_body: String::new(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Reads `PUSH_BRIDGE_*` variables from an explicit set of pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid {}* environment variable: {}", ENV_PREFIX, e))
    }

    pub fn normalizer(&self) -> PayloadNormalizer {
        PayloadNormalizer::new(self.default_title.clone(), self.default_body.clone())
    }
}
