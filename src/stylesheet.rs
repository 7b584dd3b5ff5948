//! Stylesheet system for the gallery page colors
//!
//! This module provides symbolic color tokens that can be resolved to
//! concrete values via stylesheets, so the same icon tree can be rendered
//! with different page treatments without touching the renderer.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - dark hover label on a plain light page
const DEFAULT_PALETTE: &str = r##"
[colors]
# Hover label treatment
label-background = "#333333"
label-foreground = "#ffffff"

# Page treatment
page-background = "#ffffff"
page-foreground = "#1a1a1a"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for the exact token
    /// 2. Check the default palette for the exact token
    /// 3. Use the category default (label → dark, page → light)
    pub fn resolve_or_default(&self, token: &str) -> String {
        // Try this stylesheet first
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        // Fallback to default palette
        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        // Final fallback: category defaults
        if token.starts_with("label") {
            return "#333333".to_string();
        }
        if token.starts_with("page") {
            return "#ffffff".to_string();
        }

        // Unknown category - return dark gray
        "#333333".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
