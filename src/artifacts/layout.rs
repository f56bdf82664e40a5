//! Build output layout planning.
//!
//! # Responsibilities
//! - Map (root dir, subproject names) to output directories
//! - Place every subproject's output one level under a shared root
//! - Order subproject evaluation so the anchor is first
//!
//! # Design Decisions
//! - Planning is a pure function of the build config; no filesystem access
//! - The shared root sits two levels above the native root dir, so web and
//!   mobile outputs land in one place
//! - Paths are normalized lexically; symlinks are not resolved

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::config::schema::BuildConfig;

/// Error type for layout planning.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("build root directory is empty")]
    EmptyRoot,
    #[error("subproject name '{0}' is not a valid directory name")]
    InvalidSubproject(String),
    #[error("evaluation anchor '{0}' is not a declared subproject")]
    AnchorNotDeclared(String),
}

/// A subproject and the output directory assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprojectOutput {
    pub name: String,
    pub output_dir: PathBuf,
}

/// The planned output directory mapping for one build tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    shared_root: PathBuf,
    subprojects: Vec<SubprojectOutput>,
    evaluation_order: Vec<String>,
    repositories: Vec<String>,
}

impl OutputLayout {
    /// Plan the output mapping for a build config.
    ///
    /// The shared root is `<root_dir>/../../build`, normalized lexically.
    /// The root project's own output directory is the shared root; each
    /// subproject gets `<shared root>/<name>`.
    pub fn plan(build: &BuildConfig) -> Result<Self, LayoutError> {
        if build.root_dir.is_empty() {
            return Err(LayoutError::EmptyRoot);
        }

        let shared_root = normalize(&Path::new(&build.root_dir).join("../../build"));

        let mut subprojects = Vec::with_capacity(build.subprojects.len());
        for name in &build.subprojects {
            if name.is_empty()
                || name == "."
                || name == ".."
                || name.contains('/')
                || name.contains('\\')
            {
                return Err(LayoutError::InvalidSubproject(name.clone()));
            }
            subprojects.push(SubprojectOutput {
                name: name.clone(),
                output_dir: shared_root.join(name),
            });
        }

        if !build
            .subprojects
            .iter()
            .any(|name| name == &build.evaluation_anchor)
        {
            return Err(LayoutError::AnchorNotDeclared(
                build.evaluation_anchor.clone(),
            ));
        }

        let mut evaluation_order = Vec::with_capacity(build.subprojects.len());
        evaluation_order.push(build.evaluation_anchor.clone());
        for name in &build.subprojects {
            if name != &build.evaluation_anchor {
                evaluation_order.push(name.clone());
            }
        }

        Ok(Self {
            shared_root,
            subprojects,
            evaluation_order,
            repositories: build.repositories.clone(),
        })
    }

    /// The shared output root; also the root project's output directory.
    pub fn shared_root(&self) -> &Path {
        &self.shared_root
    }

    /// Output directories per subproject, in declared order.
    pub fn subprojects(&self) -> &[SubprojectOutput] {
        &self.subprojects
    }

    /// Output directory for one subproject, if declared.
    pub fn subproject_dir(&self, name: &str) -> Option<&Path> {
        self.subprojects
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.output_dir.as_path())
    }

    /// Subproject names with the evaluation anchor first.
    pub fn evaluation_order(&self) -> &[String] {
        &self.evaluation_order
    }

    /// Package repository sources declared for every subproject.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }
}

/// Lexical normalization: resolves `.` and `..` without touching the
/// filesystem. Leading `..` components on relative paths are kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
