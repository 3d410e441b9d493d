// src/codegen/mod.rs — Generated-code handling: extraction and file-set assembly

pub mod assemble;
pub mod extract;

use serde::{Deserialize, Serialize};

use crate::infra::errors::FusionError;

/// Ordered mapping from file path to file content.
///
/// serde_json's preserve_order feature keeps keys in insertion order, which
/// mirrors the JSON object payloads the clients send and receive. Values are
/// expected to be strings; consumers that read content (store sanitization,
/// theming, bundling) validate that expectation where they enforce it.
pub type FileMap = serde_json::Map<String, serde_json::Value>;

/// Closed set of output modes. Determines the shape of the assembled
/// file set (§ FileSetAssembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Plain utility-class markup, single file.
    Tailwind,
    /// Component-based project with fixed auxiliary files.
    React,
    /// Combined mode; assembles the same auxiliary set as React.
    Both,
}

impl Framework {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tailwind" => Some(Self::Tailwind),
            "react" => Some(Self::React),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::React => "react",
            Self::Both => "both",
        }
    }

    /// Human phrasing appended to generation prompts so the model emits
    /// the expected vocabulary.
    pub fn prompt_vocabulary(&self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind CSS",
            Self::React => "React",
            Self::Both => "React and Tailwind CSS",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Framework {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            FusionError::validation("framework must be one of: tailwind, react, both")
        })
    }
}
