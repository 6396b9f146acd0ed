use crate::error::LoadError;
use crate::graph::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationConfig {
    pub search: SearchStrategy,
    pub validate_certificates: bool,
    pub cache_verdicts: bool,
    pub parallel: bool,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        EliminationConfig {
            search: SearchStrategy::BreadthFirst,
            validate_certificates: true,
            cache_verdicts: true,
            parallel: false,
        }
    }
}

impl EliminationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
