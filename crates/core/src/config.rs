use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "authorship.toml";
pub const MAX_FAIL_ABOVE: u8 = 100;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Markdown,
    All,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub fail_above: Option<u8>,
    pub sequential: Option<bool>,
    pub format: Option<ReportFormat>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
        if let Some(limit) = config.fail_above {
            anyhow::ensure!(
                limit <= MAX_FAIL_ABOVE,
                "invalid {}: fail_above = {limit} is above {MAX_FAIL_ABOVE}",
                path.display()
            );
        }
        Ok(config)
    }

    /// Loads `authorship.toml` from the working directory. `None` when the
    /// file is absent; a present but unreadable file is an error.
    pub fn discover() -> Option<anyhow::Result<Self>> {
        let path = Path::new(CONFIG_FILE_NAME);
        path.exists().then(|| Config::load(path))
    }
}
