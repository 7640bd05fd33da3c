//! Path resolution and root containment
//!
//! Requested paths are logical paths rooted at `/`, which stands for the
//! configured root directory. Resolution is lexical first (join, then fold
//! `.`/`..` without touching the filesystem), then checked component-wise
//! against the root. The surviving target is canonicalized once more so a
//! symlink cannot lead the walk outside the root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use crate::types::{FilezError, FilezResult};

/// Compute the absolute form of a path without following symlinks
///
/// Relative paths are joined onto the current working directory, and `.`/`..`
/// segments are folded structurally.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}

/// The directory every request is confined to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDirectory {
    path: PathBuf,
}

impl RootDirectory {
    /// Validate a configured root directory
    ///
    /// Fails with [`FilezError::Configuration`] when the path cannot be made
    /// absolute, does not exist, or is not a directory.
    pub fn new(path: impl AsRef<Path>) -> FilezResult<Self> {
        let path = path.as_ref();
        let absolute = absolute(path).map_err(|e| {
            FilezError::Configuration(format!(
                "Cannot resolve root directory '{}': {}",
                path.display(),
                e
            ))
        })?;

        match fs::metadata(&absolute) {
            Ok(metadata) if metadata.is_dir() => Ok(Self { path: absolute }),
            Ok(_) => Err(FilezError::Configuration(format!(
                "Root directory '{}' is not a directory",
                path.display()
            ))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FilezError::Configuration(
                format!("Root directory '{}' does not exist", path.display()),
            )),
            Err(e) => Err(FilezError::Configuration(format!(
                "Cannot access root directory '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A requested path that passed containment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Lexical absolute target, spelled under the root as configured
    pub path: PathBuf,
    /// Canonical root the target was checked against
    pub canonical_root: PathBuf,
}

/// Maps requested paths onto the filesystem, refusing anything outside the root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: RootDirectory,
}

impl PathResolver {
    pub fn new(root: RootDirectory) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RootDirectory {
        &self.root
    }

    /// Resolve a requested path to an absolute path inside the root
    ///
    /// An empty path or `/` names the root itself. Otherwise a single leading
    /// `/` is stripped and the rest is joined onto the root. The returned path
    /// is lexical (spelled under the root as configured), and is guaranteed to
    /// exist at the time of the call. The canonical root computed along the way
    /// is returned with it so callers need not canonicalize again.
    pub fn resolve(&self, requested: &str) -> FilezResult<ResolvedPath> {
        if requested.contains('\0') {
            return Err(FilezError::InvalidPath(
                "Path contains null byte".to_string(),
            ));
        }

        let canonical_root = self.canonical_root()?;

        let target = if requested.is_empty() || requested == "/" {
            self.root.path.clone()
        } else {
            let relative = requested.strip_prefix('/').unwrap_or(requested);
            self.root.path.join(relative)
        };

        let absolute_target = absolute(&target)
            .map_err(|e| FilezError::Resolution(format!("{}: {}", target.display(), e)))?;
        let absolute_root = absolute(&self.root.path)
            .map_err(|e| FilezError::Resolution(format!("root directory: {}", e)))?;

        // Path::starts_with compares whole components, so `/tmp/rootevil`
        // is not inside `/tmp/root`.
        if !absolute_target.starts_with(&absolute_root) {
            tracing::warn!(requested, "Rejected path outside root directory");
            return Err(FilezError::PathOutsideRoot(requested.to_string()));
        }

        let canonical_target = match fs::canonicalize(&absolute_target) {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FilezError::PathNotFound(requested.to_string()));
            }
            Err(e) => {
                return Err(FilezError::Resolution(format!(
                    "{}: {}",
                    absolute_target.display(),
                    e
                )));
            }
        };

        if !canonical_target.starts_with(&canonical_root) {
            tracing::warn!(
                requested,
                target = %canonical_target.display(),
                "Rejected symlink escaping root directory"
            );
            return Err(FilezError::PathOutsideRoot(requested.to_string()));
        }

        Ok(ResolvedPath {
            path: absolute_target,
            canonical_root,
        })
    }

    /// Canonical form of the root, re-checked on every call
    pub fn canonical_root(&self) -> FilezResult<PathBuf> {
        let display = self.root.path.display().to_string();
        match fs::canonicalize(&self.root.path) {
            Ok(path) if path.is_dir() => Ok(path),
            Ok(_) => Err(FilezError::RootVanished(display)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FilezError::RootVanished(display)),
            Err(e) => Err(FilezError::Resolution(format!("{}: {}", display, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathResolver) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("root");
        fs::create_dir_all(root.join("testdir/nested")).unwrap();
        fs::write(root.join("testdir/file.txt"), "test").unwrap();
        let resolver = PathResolver::new(RootDirectory::new(&root).unwrap());
        (temp, resolver)
    }

    #[test]
    fn test_root_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = RootDirectory::new(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, FilezError::Configuration(_)));
    }

    #[test]
    fn test_root_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = RootDirectory::new(&file).unwrap_err();
        assert!(matches!(err, FilezError::Configuration(_)));
    }

    #[test]
    fn test_empty_and_slash_resolve_to_root() {
        let (_temp, resolver) = fixture();
        let root = resolver.root().path().to_path_buf();
        assert_eq!(resolver.resolve("").unwrap().path, root);
        assert_eq!(resolver.resolve("/").unwrap().path, root);
    }

    #[test]
    fn test_slash_variants_resolve_to_same_directory() {
        let (_temp, resolver) = fixture();
        let expected = resolver.root().path().join("testdir");
        for requested in ["/testdir", "testdir", "/testdir/", "testdir/", "/testdir/./nested/.."] {
            assert_eq!(resolver.resolve(requested).unwrap().path, expected, "{}", requested);
        }
    }

    #[test]
    fn test_parent_escape_rejected() {
        let (_temp, resolver) = fixture();
        for requested in ["/../", "..", "/testdir/../../", "/testdir/nested/../../../etc"] {
            let err = resolver.resolve(requested).unwrap_err();
            assert!(
                matches!(err, FilezError::PathOutsideRoot(_)),
                "{} gave {:?}",
                requested,
                err
            );
        }
    }

    #[test]
    fn test_dotdot_staying_inside_is_allowed() {
        let (_temp, resolver) = fixture();
        let resolved = resolver.resolve("/testdir/nested/../file.txt").unwrap().path;
        assert_eq!(resolved, resolver.root().path().join("testdir/file.txt"));
    }

    #[test]
    fn test_sibling_with_shared_prefix_rejected() {
        let (temp, resolver) = fixture();
        fs::create_dir_all(temp.path().join("rootevil")).unwrap();
        let err = resolver.resolve("/../rootevil").unwrap_err();
        assert!(matches!(err, FilezError::PathOutsideRoot(_)));
    }

    #[test]
    fn test_double_leading_slash_rejected() {
        let (_temp, resolver) = fixture();
        let err = resolver.resolve("//etc").unwrap_err();
        assert!(matches!(err, FilezError::PathOutsideRoot(_)));
    }

    #[test]
    fn test_nonexistent_target() {
        let (_temp, resolver) = fixture();
        let err = resolver.resolve("/nonexistent").unwrap_err();
        assert!(matches!(err, FilezError::PathNotFound(ref p) if p == "/nonexistent"));
    }

    #[test]
    fn test_null_byte_rejected() {
        let (_temp, resolver) = fixture();
        let err = resolver.resolve("/testdir\0").unwrap_err();
        assert!(matches!(err, FilezError::InvalidPath(_)));
    }

    #[test]
    fn test_resolve_carries_canonical_root() {
        let (_temp, resolver) = fixture();
        let resolved = resolver.resolve("/testdir").unwrap();
        assert_eq!(
            resolved.canonical_root,
            fs::canonicalize(resolver.root().path()).unwrap()
        );
        assert!(fs::canonicalize(&resolved.path)
            .unwrap()
            .starts_with(&resolved.canonical_root));
    }

    #[test]
    fn test_root_removed_after_startup() {
        let (temp, resolver) = fixture();
        fs::remove_dir_all(temp.path().join("root")).unwrap();
        let err = resolver.resolve("/").unwrap_err();
        assert!(matches!(err, FilezError::RootVanished(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escaping_root_rejected() {
        let (temp, resolver) = fixture();
        let outside = temp.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        std::os::unix::fs::symlink(&outside, resolver.root().path().join("escape")).unwrap();

        let err = resolver.resolve("/escape").unwrap_err();
        assert!(matches!(err, FilezError::PathOutsideRoot(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_inside_root_allowed() {
        let (_temp, resolver) = fixture();
        let root = resolver.root().path().to_path_buf();
        std::os::unix::fs::symlink(root.join("testdir"), root.join("alias")).unwrap();

        assert_eq!(resolver.resolve("/alias").unwrap().path, root.join("alias"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_not_found() {
        let (_temp, resolver) = fixture();
        let root = resolver.root().path().to_path_buf();
        std::os::unix::fs::symlink(root.join("gone"), root.join("dangling")).unwrap();

        let err = resolver.resolve("/dangling").unwrap_err();
        assert!(matches!(err, FilezError::PathNotFound(_)));
    }
}
