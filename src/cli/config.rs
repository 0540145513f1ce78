use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{explorer::ExplorerConfig, tracing::TracingConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

pub struct EnvOverride {
    pub explorer_url: Option<url::Url>,
}

impl Config {
    pub fn load(
        path: Option<impl AsRef<Path>>,
        EnvOverride { explorer_url }: EnvOverride,
    ) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let config_file =
                    std::fs::read_to_string(path).context("Couldn't read config file")?;
                serde_yaml::from_str(&config_file).context("Couldn't parse config file")?
            }
            None => Config::default(),
        };

        if let Some(url) = explorer_url {
            config.explorer.url = url.to_string();
        }

        Ok(config)
    }
}
