//! Creational patterns: who builds an object, and how.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

/// Target platform for the factory patterns, usually read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Mac,
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Web => "web",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "mac" | "macos" => Ok(Platform::Mac),
            "web" | "html" => Ok(Platform::Web),
            _ => Err(FactoryError::UnknownPlatform(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
    #[error("platform '{platform}' is not supported by the {pattern} demo")]
    Unsupported {
        platform: Platform,
        pattern: &'static str,
    },
}
