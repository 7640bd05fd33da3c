//! The walk_directory operation: resolve, then walk

use crate::resolver::{PathResolver, RootDirectory};
use crate::types::{FilezResult, WalkOptions};
use crate::walker::{TreeWalker, WalkResult};

/// Logical path naming the root directory
pub const ROOT_PATH: &str = "/";

/// Synchronous directory enumeration confined to one root
///
/// Holds no mutable state, so clones may run concurrently on any thread.
#[derive(Debug, Clone)]
pub struct WalkService {
    resolver: PathResolver,
    options: WalkOptions,
}

impl WalkService {
    pub fn new(root: RootDirectory, options: WalkOptions) -> Self {
        Self {
            resolver: PathResolver::new(root),
            options,
        }
    }

    pub fn root(&self) -> &RootDirectory {
        self.resolver.root()
    }

    /// List every entry at or below `path`, which defaults to the root
    pub fn walk_directory(&self, path: Option<&str>) -> FilezResult<WalkResult> {
        let requested = path.unwrap_or(ROOT_PATH);
        let resolved = self.resolver.resolve(requested)?;

        let result = TreeWalker::new(self.options.clone())
            .within(resolved.canonical_root)
            .walk(&resolved.path)?;

        tracing::debug!(
            requested,
            entries = result.entries.len(),
            skipped = result.skipped,
            "Walked directory"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FilezError;
    use std::fs;
    use tempfile::TempDir;

    fn service() -> (TempDir, WalkService) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("subdir1/subsubdir")).unwrap();
        fs::write(temp.path().join("file1.txt"), "x").unwrap();
        fs::write(temp.path().join("subdir1/file2.go"), "x").unwrap();
        let root = RootDirectory::new(temp.path()).unwrap();
        (temp, WalkService::new(root, WalkOptions::default()))
    }

    #[test]
    fn test_default_path_matches_slash() {
        let (_temp, service) = service();
        let default = service.walk_directory(None).unwrap();
        let slash = service.walk_directory(Some("/")).unwrap();
        let empty = service.walk_directory(Some("")).unwrap();
        assert_eq!(default, slash);
        assert_eq!(default, empty);
        assert_eq!(default.entries.len(), 5);
    }

    #[test]
    fn test_subdirectory_walk_starts_at_target() {
        let (temp, service) = service();
        let result = service.walk_directory(Some("/subdir1")).unwrap();
        let subdir = temp.path().join("subdir1");
        assert_eq!(result.entries.len(), 3);
        assert_eq!(
            result.entries[0],
            crate::walker::to_slash(&subdir).unwrap()
        );
    }

    #[test]
    fn test_errors_propagate() {
        let (_temp, service) = service();
        assert!(matches!(
            service.walk_directory(Some("/../")),
            Err(FilezError::PathOutsideRoot(_))
        ));
        assert!(matches!(
            service.walk_directory(Some("/nonexistent")),
            Err(FilezError::PathNotFound(_))
        ));
    }
}
