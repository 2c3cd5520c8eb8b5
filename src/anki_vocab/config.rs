use crate::error::{Result, VocabError};
use crate::model::{DEFAULT_DECK_NAME, DEFAULT_DEFINITION, DEFAULT_OUTPUT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Per-user defaults, stored in `<config dir>/config.json`. Command-line flags win over these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package path used when `--output` is not given
    #[serde(default = "default_output")]
    pub output: String,

    /// Deck name used when `--name` is not given
    #[serde(default = "default_deck_name")]
    pub deck_name: String,

    /// Definition written for rows whose definition is blank
    #[serde(default = "default_definition")]
    pub default_definition: String,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_deck_name() -> String {
    DEFAULT_DECK_NAME.to_string()
}

fn default_definition() -> String {
    DEFAULT_DEFINITION.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            deck_name: default_deck_name(),
            default_definition: default_definition(),
        }
    }
}

impl GeneratorConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VocabError::Io)?;
        let config: GeneratorConfig =
            serde_json::from_str(&content).map_err(VocabError::Config)?;
        Ok(config)
    }

    pub fn resolve_output(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.output.clone())
    }

    pub fn resolve_deck_name(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.deck_name.clone())
    }
}
