use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_URL: &str = "http://localhost:9200";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Reads the config file, or the defaults when it does not exist. The
    /// cluster URL is normalised on the way in.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let mut config: Self = serde_json::from_str(&data).context("parse config")?;
        let url = std::mem::take(&mut config.url);
        config.set_url(&url).context("invalid url in config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    /// Stores `url` without surrounding whitespace or trailing slashes.
    /// Request paths are absolute, so a trailing slash would double up.
    pub fn set_url(&mut self, url: &str) -> anyhow::Result<()> {
        let url = url.trim().trim_end_matches('/');
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .with_context(|| format!("`{url}` is not an http(s) url"))?;
        if rest.is_empty() {
            anyhow::bail!("`{url}` has no host");
        }
        self.url = url.to_string();
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project = ProjectDirs::from("com", "snapshot-client", "snapshot-client")
        .context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}
