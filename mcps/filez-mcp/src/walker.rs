//! Recursive tree traversal
//!
//! The walk is depth-first and pre-order with siblings sorted by file name, so
//! a directory is always listed before its children and two walks of the same
//! tree produce the same sequence. Entries that fail mid-walk are logged and
//! skipped; only a root that cannot be opened fails the call.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use walkdir::{DirEntry, WalkDir};

use crate::resolver;
use crate::types::{FilezError, FilezResult, WalkOptions};

/// Paths collected by [`TreeWalker::walk`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    /// Absolute, forward-slash paths in walk order
    pub entries: Vec<String>,
    /// Entries or directory listings dropped because they could not be read
    pub skipped: usize,
}

/// Counters reported by [`TreeWalker::visit`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub visited: usize,
    pub skipped: usize,
}

/// Render a path with `/` separators regardless of host convention
pub fn to_slash(path: &Path) -> Option<String> {
    let s = path.to_str()?;
    if MAIN_SEPARATOR == '/' {
        Some(s.to_string())
    } else {
        Some(s.replace(MAIN_SEPARATOR, "/"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    options: WalkOptions,
    /// Canonical root; symlinked directories resolving outside it are not entered
    boundary: Option<PathBuf>,
}

impl TreeWalker {
    pub fn new(options: WalkOptions) -> Self {
        Self {
            options,
            boundary: None,
        }
    }

    /// Confine symlink traversal to the given canonical directory
    pub fn within(mut self, canonical_root: PathBuf) -> Self {
        self.boundary = Some(canonical_root);
        self
    }

    /// Walk `root` and collect every entry as an absolute forward-slash path
    pub fn walk(&self, root: &Path) -> FilezResult<WalkResult> {
        let mut entries = Vec::new();

        let summary = self.visit(root, |entry| -> Result<(), String> {
            let path = entry.path();
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                resolver::absolute(path).map_err(|e| e.to_string())?
            };
            let normalized = to_slash(&absolute)
                .ok_or_else(|| format!("path is not valid UTF-8: {}", absolute.display()))?;
            entries.push(normalized);
            Ok(())
        })?;

        tracing::debug!(
            root = %root.display(),
            visited = summary.visited,
            skipped = summary.skipped,
            "Walk finished"
        );

        Ok(WalkResult {
            entries,
            skipped: summary.skipped,
        })
    }

    /// Invoke `visitor` for `root` and every entry below it
    ///
    /// A visitor error, like a traversal error on a single entry, is logged and
    /// counted in [`WalkSummary::skipped`]; the walk carries on with the next
    /// entry.
    pub fn visit<F, E>(&self, root: &Path, mut visitor: F) -> FilezResult<WalkSummary>
    where
        F: FnMut(&DirEntry) -> Result<(), E>,
        E: fmt::Display,
    {
        let metadata = fs::metadata(root).map_err(|e| root_error(root, e))?;
        if metadata.is_dir() {
            fs::read_dir(root).map_err(|e| root_error(root, e))?;
        }

        let mut summary = WalkSummary::default();
        let mut iter = WalkDir::new(root)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = iter.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    // The root changed after the metadata check
                    return Err(root_walk_error(root, err));
                }
                Err(err) => {
                    tracing::warn!(
                        path = ?err.path(),
                        error = %err,
                        "Skipping unreadable entry"
                    );
                    summary.skipped += 1;
                    continue;
                }
            };

            let escapes = entry.depth() > 0
                && entry.path_is_symlink()
                && entry.file_type().is_dir()
                && self.escapes_boundary(entry.path());

            match visitor(&entry) {
                Ok(()) => summary.visited += 1,
                Err(err) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %err,
                        "Skipping entry"
                    );
                    summary.skipped += 1;
                }
            }

            if escapes {
                tracing::debug!(
                    path = %entry.path().display(),
                    "Not following symlink outside root directory"
                );
                iter.skip_current_dir();
            }
        }

        Ok(summary)
    }

    fn escapes_boundary(&self, path: &Path) -> bool {
        let Some(boundary) = &self.boundary else {
            return false;
        };
        match fs::canonicalize(path) {
            Ok(target) => !target.starts_with(boundary),
            Err(_) => true,
        }
    }
}

fn root_error(root: &Path, err: io::Error) -> FilezError {
    if err.kind() == io::ErrorKind::NotFound {
        FilezError::RootVanished(root.display().to_string())
    } else {
        FilezError::WalkRootUnreadable {
            path: root.display().to_string(),
            source: err,
        }
    }
}

/// Map a traversal error on the root entry itself to a call failure
fn root_walk_error(root: &Path, err: walkdir::Error) -> FilezError {
    match err.into_io_error() {
        Some(io_err) => root_error(root, io_err),
        None => FilezError::WalkRootUnreadable {
            path: root.display().to_string(),
            source: io::Error::other("filesystem loop"),
        },
    }
}
