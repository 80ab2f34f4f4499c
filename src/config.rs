use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::suffix::SUFFIX_LEN;

pub const DEFAULT_MAX_INSTANCE_ID_LENGTH: usize = 30;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub instance: InstanceIdConfig,
    #[serde(default)]
    pub database: DatabaseIdConfig,
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let cfg = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path))?;
        Self::parse(&cfg).with_context(|| format!("invalid config file: {}", path))
    }

    pub fn parse(cfg: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(cfg)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.instance.max_length <= SUFFIX_LEN {
            bail!(
                "instance.max_length must be greater than {}, got {}",
                SUFFIX_LEN,
                self.instance.max_length
            );
        }

        if self.database.max_length == Some(0) {
            bail!("database.max_length must be greater than 0");
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct InstanceIdConfig {
    /// Upper bound for the full instance id, suffix included.
    #[serde(default = "default_max_instance_id_length")]
    pub max_length: usize,
}

impl InstanceIdConfig {
    /// Room left for the sanitized base once the suffix is appended.
    pub fn max_base_length(&self) -> usize {
        self.max_length.saturating_sub(SUFFIX_LEN)
    }
}

impl Default for InstanceIdConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_instance_id_length(),
        }
    }
}

fn default_max_instance_id_length() -> usize {
    DEFAULT_MAX_INSTANCE_ID_LENGTH
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DatabaseIdConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}
