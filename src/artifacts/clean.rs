//! Deletion of the shared build output root.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::artifacts::layout::OutputLayout;

/// Error type for clean operations.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Deletion was blocked (permissions, open handles). Reported to the
    /// caller; the library never aborts on it.
    #[error("failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a clean invocation actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The shared root existed and was removed with everything beneath it.
    Removed,
    /// The shared root did not exist; nothing to do.
    AlreadyClean,
}

/// Remove the planned layout's shared output root recursively.
///
/// A missing root is a successful no-op, so `clean` can run before any
/// build has produced output.
pub fn clean(layout: &OutputLayout) -> Result<CleanOutcome, CleanError> {
    let root = layout.shared_root();

    match fs::remove_dir_all(root) {
        Ok(()) => {
            tracing::info!(path = %root.display(), "Removed build output root");
            Ok(CleanOutcome::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %root.display(), "Build output root already absent");
            Ok(CleanOutcome::AlreadyClean)
        }
        Err(source) => Err(CleanError::Remove {
            path: root.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::BuildConfig;
    use std::path::Path;

    fn layout_under(dir: &Path) -> OutputLayout {
        let build = BuildConfig {
            root_dir: dir.join("student_app/android").display().to_string(),
            subprojects: vec!["app".to_string()],
            evaluation_anchor: "app".to_string(),
            repositories: vec!["google".to_string()],
        };
        OutputLayout::plan(&build).unwrap()
    }

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("campus-panel-{}-{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_clean_removes_root_and_contents() {
        let dir = scratch_dir("clean-removes");
        let layout = layout_under(&dir);

        let app_out = layout.subproject_dir("app").unwrap();
        fs::create_dir_all(app_out).unwrap();
        fs::write(app_out.join("classes.dex"), b"artifact").unwrap();

        assert_eq!(clean(&layout).unwrap(), CleanOutcome::Removed);
        assert!(!layout.shared_root().exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clean_on_missing_root_is_noop() {
        let dir = scratch_dir("clean-noop");
        let layout = layout_under(&dir);

        assert_eq!(clean(&layout).unwrap(), CleanOutcome::AlreadyClean);
        assert_eq!(clean(&layout).unwrap(), CleanOutcome::AlreadyClean);

        fs::remove_dir_all(&dir).unwrap();
    }
}
