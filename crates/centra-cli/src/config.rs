//! `centra.toml` configuration.
//!
//! Every field has a default, so an empty or partial file is valid. The
//! file is looked up at `--config <PATH>` when given (it must exist), else
//! `./centra.toml` when present; otherwise defaults apply.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputMode;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "centra.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentraConfig {
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for `centra random`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    #[serde(default = "default_nodes")]
    pub nodes: u32,
    #[serde(default = "default_probability")]
    pub probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            probability: default_probability(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputMode>,
}

const fn default_nodes() -> u32 {
    15
}

const fn default_probability() -> f64 {
    0.5
}

/// Load the effective configuration.
///
/// # Errors
///
/// Fails if an explicit `path` does not exist, or if the chosen file
/// cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<CentraConfig> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let candidate = working_dir.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                debug!("no {CONFIG_FILE_NAME} found; using defaults");
                return Ok(CentraConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<CentraConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_gnp_demo() {
        let config = CentraConfig::default();
        assert_eq!(config.random.nodes, 15);
        assert!((config.random.probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.random.seed, None);
        assert_eq!(config.output.format, None);
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(None, dir.path()).expect("load");
        assert_eq!(config, CentraConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[random]\nseed = 7\n\n[output]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = load_config(None, dir.path()).expect("load");
        assert_eq!(config.random.seed, Some(7));
        assert_eq!(config.random.nodes, 15);
        assert_eq!(config.output.format, Some(OutputMode::Json));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing), dir.path()).expect_err("missing file");
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[random]\nnodes = \"many\"\n").expect("write config");
        let err = load_config(Some(&path), dir.path()).expect_err("bad type");
        assert!(err.to_string().contains("bad.toml"));
    }
}
