//! Link resolution and folder containment.
//!
//! A relative link is joined onto its skill folder and resolved to an
//! absolute path: `.` and `..` segments are applied and every existing
//! symbolic link along the way is followed. The resolved path must stay
//! inside the (equally resolved) folder. Escape is checked before existence,
//! so a link that both escapes and dangles reports only the escape.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Symbolic links followed through missing targets before giving up.
const MAX_LINK_HOPS: usize = 40;

/// Outcome of checking one link target against its folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Contained and present on disk (file or directory).
    Resolved(PathBuf),
    /// Resolves outside the folder; existence was not checked.
    Escapes(PathBuf),
    /// Contained but nothing exists at the resolved path.
    Missing(PathBuf),
}

/// Resolves `path` to an absolute form without requiring it to exist.
///
/// Each component is canonicalized as it is appended, so symbolic links are
/// followed before any `..` that comes after them. A symbolic link whose
/// target does not exist is still followed. Other components that do not
/// exist are kept as written.
///
/// # Errors
///
/// Propagates any I/O error other than "not found" (e.g. permission denied),
/// fails on an overly long chain of dangling links, and
/// fails if a relative `path` cannot be anchored to the current directory.
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    resolve(path, MAX_LINK_HOPS)
}

fn resolve(path: &Path, hops: usize) -> io::Result<PathBuf> {
    let mut resolved = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir()?
    };

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                resolved.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let parent_is_dir = resolved.is_dir();
                resolved.push(name);
                if parent_is_dir {
                    match fs::canonicalize(&resolved) {
                        Ok(real) => resolved = real,
                        Err(e) if e.kind() == io::ErrorKind::NotFound => {
                            if let Some(target) = dangling_link_target(&resolved)? {
                                if hops == 0 {
                                    return Err(io::Error::other(format!(
                                        "too many levels of symbolic links at {}",
                                        resolved.display()
                                    )));
                                }
                                resolved.pop();
                                // An absolute target replaces the parent on join.
                                resolved = resolve(&resolved.join(target), hops - 1)?;
                            }
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }
    }

    Ok(resolved)
}

/// Returns the target of `path` when it is a symbolic link, `None` when
/// nothing exists there at all.
fn dangling_link_target(path: &Path) -> io::Result<Option<PathBuf>> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::read_link(path).map(Some),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Checks that `target`, relative to `folder`, stays inside it and exists.
///
/// `folder` is expected to be already [normalized](normalize); the caller
/// resolves it once per skill rather than once per link.
///
/// # Errors
///
/// Propagates I/O errors from [`normalize`].
pub fn check_link(folder: &Path, target: &str) -> io::Result<LinkStatus> {
    let resolved = normalize(&folder.join(target))?;

    if !resolved.starts_with(folder) {
        return Ok(LinkStatus::Escapes(resolved));
    }
    if !resolved.exists() {
        return Ok(LinkStatus::Missing(resolved));
    }
    Ok(LinkStatus::Resolved(resolved))
}
