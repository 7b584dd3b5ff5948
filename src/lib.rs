//! Icon Gallery - a static HTML contact sheet for SVG icon themes
//!
//! This library walks an icon-theme directory tree, resolves symlink and
//! alias indirection to find each variant's actual content and pixel size,
//! and renders one HTML page with all variants of an icon grouped together
//! under a hover-reveal label.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use icon_gallery::generate;
//!
//! let html = generate(Path::new("/usr/share/icons/breeze")).unwrap();
//! assert!(html.contains("<html>"));
//! ```

pub mod renderer;
pub mod resolver;
pub mod scanner;
pub mod stylesheet;

pub use renderer::{render_html, render_html_with_stylesheet, HtmlConfig};
pub use resolver::{DirectoryProbe, FsProbe, Indirection, ResolveError, DEFAULT_SIZE_HINT};
pub use scanner::{scan, IconGroups, IconVariant, ScanConfig, ScanError};
pub use stylesheet::Stylesheet;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during gallery generation
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The input path is missing or not a directory
    #[error("\"{}\" is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Error during the directory scan
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Scan configuration
    pub scan: ScanConfig,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Stylesheet for the emitted CSS
    pub stylesheet: Stylesheet,
    /// Debug mode: print each resolved variant to stderr
    pub debug: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            html: HtmlConfig::default(),
            stylesheet: Stylesheet::default(),
            debug: false,
        }
    }
}

impl GalleryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan configuration
    pub fn with_scan(mut self, config: ScanConfig) -> Self {
        self.scan = config;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the stylesheet for the emitted CSS
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Generate the gallery document for `root` with default configuration
///
/// This is the main entry point for the library. It validates the input
/// directory, scans it, and renders the HTML document as a single string.
pub fn generate(root: &Path) -> Result<String, GalleryError> {
    generate_with_config(root, GalleryConfig::default())
}

/// Generate the gallery document for `root` with custom configuration
///
/// The whole document is buffered before being returned, so a failure
/// during scanning never produces partial output.
pub fn generate_with_config(root: &Path, config: GalleryConfig) -> Result<String, GalleryError> {
    if !root.is_dir() {
        return Err(GalleryError::NotADirectory(root.to_path_buf()));
    }

    let groups = scan(root, &config.scan, &FsProbe)?;

    // Debug output
    if config.debug {
        eprintln!("=== Resolved icons ===");
        for (name, variants) in &groups {
            eprintln!("{}", name);
            for variant in variants {
                eprintln!("  {}", variant);
            }
        }
        eprintln!("======================");
    }

    Ok(render_html_with_stylesheet(
        &groups,
        &config.html,
        &config.stylesheet,
    ))
}
