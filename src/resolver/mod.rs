//! Alias and symlink resolution for discovered icon files
//!
//! Icon themes deduplicate variants either with symbolic links or with
//! one-line alias files whose first line names a sibling file holding the
//! actual content. Resolution follows exactly one level of indirection: an
//! alias whose target is itself an alias is not chased further, matching
//! the single-hop convention themed icon sets rely on.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Pixel dimension assumed when a resolved path contains no digit run
pub const DEFAULT_SIZE_HINT: u32 = 32;

/// Errors that can occur while resolving an icon file
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The file or its link target could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a file's resolved target was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indirection {
    /// The file is a symbolic link to the target
    Symlink,
    /// The file's first line named an existing sibling
    Alias,
    /// The file holds the icon content itself
    None,
}

impl fmt::Display for Indirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Indirection::Symlink => "symlink",
            Indirection::Alias => "alias",
            Indirection::None => "direct",
        })
    }
}

/// Outcome of resolving one icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Normalized path of the file holding the actual icon content
    pub target: PathBuf,
    /// How the target was found
    pub indirection: Indirection,
}

/// Directory-read capability used by [`resolve`]
///
/// Production code uses [`FsProbe`]. Tests can substitute an in-memory
/// implementation so resolution logic runs without touching a filesystem.
pub trait DirectoryProbe {
    /// Whether the path is a symbolic link (not followed)
    fn is_symlink(&self, path: &Path) -> bool;

    /// The raw target of a symbolic link
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Whether the path exists and refers to a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// The first line of the file with trailing whitespace stripped,
    /// or `None` for an empty file
    fn first_line(&self, path: &Path) -> io::Result<Option<String>>;
}

/// [`DirectoryProbe`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn is_symlink(&self, path: &Path) -> bool {
        path.symlink_metadata()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn first_line(&self, path: &Path) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = BufReader::new(File::open(path)?).read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

/// Resolve one level of alias or symlink indirection for `path`.
///
/// The target is interpreted relative to the containing directory and
/// lexically normalized. If the file is neither a symlink nor an alias
/// naming an existing sibling, the target is `path` itself. Read failures
/// are fatal to the caller; resolution never silently skips a file.
pub fn resolve(path: &Path, probe: &impl DirectoryProbe) -> Result<Resolution, ResolveError> {
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    if probe.is_symlink(path) {
        let link = probe.read_link(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Resolution {
            target: normalize(&base.join(link)),
            indirection: Indirection::Symlink,
        });
    }

    let first = probe.first_line(path).map_err(|source| ResolveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(line) = first {
        let candidate = base.join(line);
        if probe.is_file(&candidate) {
            return Ok(Resolution {
                target: normalize(&candidate),
                indirection: Indirection::Alias,
            });
        }
    }

    Ok(Resolution {
        target: normalize(path),
        indirection: Indirection::None,
    })
}

/// Lexically normalize a path: collapse `.` segments, resolve `..` against
/// preceding components, and drop redundant separators, all without
/// touching the filesystem. Leading `..` segments are preserved and an
/// empty input normalizes to `.`, so the result is never empty.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Extract the pixel size from the first run of ASCII digits anywhere in
/// `path`, falling back to `default` when no digits are present or the run
/// does not fit in a `u32`.
///
/// This is a heuristic over the path string, not a parsed image property:
/// a digit run in a directory name (a theme version, say) wins over the
/// actual icon dimension further along the path.
pub fn size_hint(path: &str, default: u32) -> u32 {
    let run: String = path
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if run.is_empty() {
        return default;
    }
    run.parse().unwrap_or(default)
}
