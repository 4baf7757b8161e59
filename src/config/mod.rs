mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

impl Config {
    /// Reads a YAML config file and checks it before anything touches the network.
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(contents).context("Failed to parse config")?;
        config.validate().context("Failed to validate config")?;
        Ok(config)
    }
}
