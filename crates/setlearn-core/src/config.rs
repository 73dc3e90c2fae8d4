//! setlearn configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::particles::ParticleSettings;

/// Top-level setlearn configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlearnConfig {
    /// Question bank to quiz on; the built-in bank when unset.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Fixed seed for question order, for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Where the like counter is stored.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Particle field rendered by `setlearn particles`.
    #[serde(default)]
    pub particles: ParticleSettings,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".setlearn")
}

impl Default for SetlearnConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            seed: None,
            state_dir: default_state_dir(),
            particles: ParticleSettings::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Expand `${VAR}` references, then anchor a relative path at `base`.
fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = PathBuf::from(resolve_env_vars(&path.to_string_lossy()));
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `setlearn.toml` in the current directory
/// 2. `~/.config/setlearn/config.toml`
///
/// Relative paths in a config file are resolved against the file's
/// directory. Environment variable overrides (`SETLEARN_BANK`,
/// `SETLEARN_STATE_DIR`) are resolved against the current directory.
pub fn load_config_from(path: Option<&Path>) -> Result<SetlearnConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("setlearn.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<SetlearnConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;

            let base = path.parent().unwrap_or(Path::new(""));
            config.question_bank = config.question_bank.map(|p| resolve_path(&p, base));
            config.state_dir = resolve_path(&config.state_dir, base);
            config
        }
        None => SetlearnConfig::default(),
    };

    let cwd = Path::new("");
    if let Ok(bank) = std::env::var("SETLEARN_BANK") {
        config.question_bank = Some(resolve_path(Path::new(&bank), cwd));
    }
    if let Ok(dir) = std::env::var("SETLEARN_STATE_DIR") {
        config.state_dir = resolve_path(Path::new(&dir), cwd);
    }

    anyhow::ensure!(
        config.particles.link_distance > 0.0,
        "particles.link_distance must be positive"
    );
    anyhow::ensure!(
        config.particles.width > 0.0 && config.particles.height > 0.0,
        "particles.width and particles.height must be positive"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("setlearn"))
}
