use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// CLI configuration (`baudoc.toml`). The engine itself takes no
/// configuration; everything here drives the directory scanner and the
/// report rendering.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Read file contents (UTF-8 text only) to feed the matcher's
    /// content signal during `baudoc classify`.
    #[serde(default)]
    pub read_content: bool,
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
            read_content: false,
            max_content_bytes: default_max_content_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Suggestions at or above this confidence are marked as safe to
    /// auto-apply in the report. The engine never applies anything.
    #[serde(default = "default_auto_apply_threshold")]
    pub auto_apply_threshold: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            auto_apply_threshold: default_auto_apply_threshold(),
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*".to_string()]
}

fn default_max_content_bytes() -> usize {
    256 * 1024
}

fn default_auto_apply_threshold() -> u8 {
    60
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.report.auto_apply_threshold > 100 {
        anyhow::bail!("report.auto_apply_threshold must be in [0, 100]");
    }

    if config.scan.read_content && config.scan.max_content_bytes == 0 {
        anyhow::bail!("scan.max_content_bytes must be > 0 when scan.read_content is enabled");
    }

    if config.scan.include_globs.is_empty() {
        anyhow::bail!("scan.include_globs must not be empty");
    }

    Ok(config)
}

/// Load the config if the file exists, otherwise fall back to defaults.
/// A config file is optional for every command.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
