// crates/infra/src/format.rs
use std::path::Path;

use decompose_inp_shared_kernel::{InfraResult, InfrastructureError};
use serde::{Serialize, de::DeserializeOwned};

/// Serialization format of model and table documents, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn for_path(path: &Path, what: &str) -> InfraResult<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| InfrastructureError::UnsupportedFormat { what: what.to_string(), path: path.to_path_buf() })
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> InfraResult<T> {
        Ok(match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
        })
    }

    pub fn render<T: Serialize>(self, value: &T) -> InfraResult<String> {
        Ok(match self {
            Self::Json => {
                let mut text = serde_json::to_string_pretty(value)?;
                text.push('\n');
                text
            }
            Self::Yaml => serde_yaml::to_string(value)?,
        })
    }
}
