//! Directory traversal and icon grouping
//!
//! Walks an icon-theme tree, resolves every `.svg` file it finds, and
//! groups the resulting variants by base filename. Group order and the
//! variant order within a group follow discovery order, which is why the
//! map type is insertion-ordered.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use walkdir::WalkDir;

use crate::resolver::{self, DirectoryProbe, Indirection, DEFAULT_SIZE_HINT};

/// Errors that can occur while scanning an icon theme
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory walk itself failed
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A discovered file could not be resolved
    #[error(transparent)]
    Resolve(#[from] resolver::ResolveError),
}

/// One discovered icon file with its resolved identity
///
/// Constructed once during the scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconVariant {
    /// Base filename, the grouping key
    pub name: String,
    /// Path the file was discovered at
    pub source: PathBuf,
    /// Normalized path of the file holding the actual content
    pub resolved: PathBuf,
    /// Pixel dimension used for both width and height when rendering
    pub size: u32,
    /// How the resolved path was found
    pub indirection: Indirection,
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: \"{}\", path: \"{}\", resolved: \"{}\" ({})",
            self.name,
            self.source.display(),
            self.resolved.display(),
            self.indirection
        )
    }
}

/// Icon variants grouped by base filename, in discovery order
pub type IconGroups = IndexMap<String, Vec<IconVariant>>;

/// Configuration for the directory scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Pixel size assumed when a resolved path contains no digit run
    pub default_size_hint: u32,

    /// Whether the walk descends into symlinked directories
    pub follow_directory_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_size_hint: DEFAULT_SIZE_HINT,
            follow_directory_links: false,
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size assumed when a resolved path contains no digit run
    pub fn with_default_size_hint(mut self, size: u32) -> Self {
        self.default_size_hint = size;
        self
    }

    /// Set whether the walk descends into symlinked directories
    pub fn with_follow_directory_links(mut self, follow: bool) -> Self {
        self.follow_directory_links = follow;
        self
    }
}

/// Walk `root` and build the grouped variant map.
///
/// Every regular `.svg` file under `root` is visited exactly once.
/// Symlinked files are resolved like any other entry; symlinked
/// directories are only descended into when the config says so. The first
/// read failure aborts the scan, so a partial result is never returned.
pub fn scan(
    root: &Path,
    config: &ScanConfig,
    probe: &impl DirectoryProbe,
) -> Result<IconGroups, ScanError> {
    let mut groups = IconGroups::new();

    for entry in WalkDir::new(root).follow_links(config.follow_directory_links) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if !path.extension().map_or(false, |ext| ext == "svg") {
            continue;
        }
        // An unfollowed symlink pointing at a directory is a traversal
        // concern, not a variant.
        if entry.file_type().is_symlink() && path.is_dir() {
            continue;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let resolution = resolver::resolve(path, probe)?;
        let size = resolver::size_hint(
            &resolution.target.to_string_lossy(),
            config.default_size_hint,
        );

        groups.entry(name.clone()).or_default().push(IconVariant {
            name,
            source: path.to_path_buf(),
            resolved: resolution.target,
            size,
            indirection: resolution.indirection,
        });
    }

    Ok(groups)
}
