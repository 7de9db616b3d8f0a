//! Workspace root resolution.
//!
//! The root is where directory discovery starts and what `hop pick` joins the
//! winning candidate onto. Resolution order:
//! - `--root` flag
//! - `HOP_ROOT` environment variable
//! - the enclosing git work tree
//! - the current directory

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::config::env_string;
use crate::error::{Error, Result};

/// How the workspace root was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Flag,
    Env,
    GitRoot,
    Cwd,
}

/// Resolved workspace root.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub source: RootSource,
}

/// Resolve the workspace root, starting git discovery at `cwd`.
pub fn resolve(flag: Option<&Path>, cwd: &Path) -> Result<Workspace> {
    let (root, source) = if let Some(p) = flag {
        (absolutize(p, cwd), RootSource::Flag)
    } else if let Some(p) = env_string("HOP_ROOT") {
        (absolutize(Path::new(&p), cwd), RootSource::Env)
    } else if let Some(p) = find_git_root(cwd) {
        (p, RootSource::GitRoot)
    } else {
        (cwd.to_path_buf(), RootSource::Cwd)
    };

    if !root.is_dir() {
        return Err(Error::Workspace(format!(
            "root is not a directory: {}",
            root.display()
        )));
    }

    let root = root.canonicalize().map_err(|e| Error::io(&root, e))?;
    debug!(root = %root.display(), ?source, "workspace root");
    Ok(Workspace { root, source })
}

/// Current directory, as an error instead of a panic.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| Error::io(".", e))
}

/// Work tree of the git repository containing `start`, if any.
///
/// Bare repositories have no work tree and are treated as "not in a repo".
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

fn absolutize(p: &Path, cwd: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    }
}

/// Absolute path for a root-relative candidate, without its trailing separator.
pub fn target_path(root: &Path, candidate: &str) -> PathBuf {
    let rel = candidate.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    if rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}
