use serde::{Deserialize, Serialize};

#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: std::time::Duration,
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl ExplorerConfig {
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

fn default_url() -> String {
    "https://blockstream.info/liquid/api".to_string()
}

fn default_timeout() -> std::time::Duration {
    std::time::Duration::from_secs(10)
}

fn default_max_concurrent_lookups() -> usize {
    1
}
