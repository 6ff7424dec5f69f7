//! Configuration for debt settlement runs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settlement run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Input configuration
    pub input: InputConfig,

    /// Rendering configuration
    pub render: RenderConfig,

    /// Netting configuration
    pub netting: NettingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "simplify-debts".to_string(),
            input: InputConfig::default(),
            render: RenderConfig::default(),
            netting: NettingConfig::default(),
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// JSON debt list path
    pub debt_list_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debt_list_path: PathBuf::from("debt_list"),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory for `.gv`, `.gv.pdf` and report files
    pub output_dir: PathBuf,

    /// Run the Graphviz `dot` binary to produce PDFs
    pub graphviz: bool,

    /// Graphviz binary name or path
    pub dot_binary: String,

    /// Write `settlement-report.json`
    pub write_report: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            graphviz: true,
            dot_binary: "dot".to_string(),
            write_report: false,
        }
    }
}

/// Netting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NettingConfig {
    /// Minimum netting efficiency (0.0 - 1.0)
    /// Below it the run still settles but logs a warning
    pub min_netting_efficiency: f64,
}

impl Default for NettingConfig {
    fn default() -> Self {
        Self {
            min_netting_efficiency: 0.0,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("SIMPLIFY_DEBTS_INPUT") {
            config.input.debt_list_path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("SIMPLIFY_DEBTS_OUTPUT_DIR") {
            config.render.output_dir = PathBuf::from(dir);
        }

        if let Ok(flag) = std::env::var("SIMPLIFY_DEBTS_GRAPHVIZ") {
            config.render.graphviz = flag.parse().map_err(|_| {
                crate::Error::Config(format!(
                    "SIMPLIFY_DEBTS_GRAPHVIZ must be true or false, got {:?}",
                    flag
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        let ratio = self.netting.min_netting_efficiency;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(crate::Error::Config(format!(
                "min_netting_efficiency must be within 0.0 - 1.0, got {}",
                ratio
            )));
        }
        Ok(())
    }
}
