//! Target path planning
//!
//! Turns rendered templates into an executable plan: the directories to
//! create (parent before child, deduplicated, project root first) and the
//! absolute file writes in registry order. The root is an explicit parameter
//! so planning stays pure and testable against any base directory.

use crate::templates::RenderedFile;
use std::path::{Path, PathBuf};

/// A single planned file write
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// The computed set of directory and file operations for one run
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    pub fn new(root: &Path, rendered: Vec<RenderedFile>) -> Self {
        let mut directories = vec![root.to_path_buf()];
        let mut files = Vec::with_capacity(rendered.len());

        for file in rendered {
            let path = root.join(file.relative_path);
            if let Some(parent) = path.parent() {
                push_ancestors(root, parent, &mut directories);
            }
            files.push(PlannedFile {
                path,
                contents: file.contents,
            });
        }

        Self {
            root: root.to_path_buf(),
            directories,
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories to create, ordered so no entry precedes its parent
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// File writes in registration order
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }
}

/// Append the directories between `root` (exclusive) and `dir` (inclusive),
/// outermost first, skipping entries already planned.
fn push_ancestors(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    let mut chain = Vec::new();
    let mut current = dir;
    while current != root {
        chain.push(current);
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    for dir in chain.into_iter().rev() {
        if !out.iter().any(|planned| planned == dir) {
            out.push(dir.to_path_buf());
        }
    }
}
