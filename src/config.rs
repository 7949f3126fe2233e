//! Names of the external tools, optionally overridden from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming a JSON toolchain file.
pub const CONFIG_ENV: &str = "LC3SCRIPT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toolchain {
    /// Assembler executable, resolved on `PATH`.
    pub assembler: String,
    /// Simulator executable, resolved on `PATH`.
    pub simulator: String,
    /// Simulator flag that introduces the script path.
    pub script_flag: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            assembler: "lc3as".to_string(),
            simulator: "lc3sim".to_string(),
            script_flag: "-s".to_string(),
        }
    }
}

impl Toolchain {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Parsing {}", path.display()))
    }

    /// Defaults unless [`CONFIG_ENV`] points at a file.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
