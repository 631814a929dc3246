use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fingraph: FingraphConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Pipeline file locations and logging
#[derive(Debug, Clone, Deserialize)]
pub struct FingraphConfig {
    /// Persisted extraction document (the handoff between the two stages).
    #[serde(default = "default_extractions_path")]
    pub extractions_path: PathBuf,
    /// Interactive graph page written by the graph stage.
    #[serde(default = "default_graph_output_path")]
    pub graph_output_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Local language model (Ollama) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Retries when the model emits unparseable JSON.
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_extractions_path() -> PathBuf {
    PathBuf::from("financial_information_extractions.json")
}

fn default_graph_output_path() -> PathBuf {
    PathBuf::from("financial_information_graph.html")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_max_retries() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for FingraphConfig {
    fn default() -> Self {
        Self {
            extractions_path: default_extractions_path(),
            graph_output_path: default_graph_output_path(),
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fingraph: FingraphConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// Looks for the config file in this order:
    /// 1. Path specified in FINGRAPH_CONFIG environment variable
    /// 2. ./config.toml in current directory
    ///
    /// A missing config file is not an error: every key has a default equal
    /// to the pipeline's built-in constants. A file named via FINGRAPH_CONFIG
    /// must exist, since the caller asked for it explicitly.
    pub fn load() -> Result<Self> {
        let (config_path, explicit) = match std::env::var("FINGRAPH_CONFIG") {
            Ok(p) => (PathBuf::from(p), true),
            Err(_) => (PathBuf::from("config.toml"), false),
        };

        if !config_path.exists() {
            if explicit {
                anyhow::bail!(
                    "Config file not found: {} (set via FINGRAPH_CONFIG)",
                    config_path.display()
                );
            }
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_toml_str(&config_str)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse config.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }

        if self.llm.max_retries == 0 {
            anyhow::bail!("llm.max_retries must be greater than 0");
        }

        if self.llm.timeout_secs == 0 {
            anyhow::bail!("llm.timeout_secs must be greater than 0");
        }

        if self.fingraph.extractions_path.as_os_str().is_empty() {
            anyhow::bail!("fingraph.extractions_path must not be empty");
        }

        if self.fingraph.graph_output_path.as_os_str().is_empty() {
            anyhow::bail!("fingraph.graph_output_path must not be empty");
        }

        Ok(())
    }

    /// Get the persisted extraction document path
    pub fn extractions_path(&self) -> &Path {
        &self.fingraph.extractions_path
    }

    /// Get the graph HTML output path
    pub fn graph_output_path(&self) -> &Path {
        &self.fingraph.graph_output_path
    }
}
