//! Plan execution against the filesystem
//!
//! Directories are created first (recursively, tolerating pre-existing
//! directories), then each planned file is written in plan order with
//! full-overwrite semantics. The first I/O failure aborts the remaining
//! writes; files already written in the same run stay on disk, so a re-run
//! overwrites and completes the partial tree.

use crate::error::ScaffoldError;
use crate::plan::ScaffoldPlan;
use std::path::PathBuf;
use tokio::fs;

/// Execute `plan`, returning the paths written in order
pub async fn materialize(plan: &ScaffoldPlan) -> Result<Vec<PathBuf>, ScaffoldError> {
    for dir in plan.directories() {
        fs::create_dir_all(dir)
            .await
            .map_err(|source| ScaffoldError::PathCreation {
                path: dir.clone(),
                source,
            })?;
    }

    let mut written = Vec::with_capacity(plan.files().len());
    for file in plan.files() {
        fs::write(&file.path, &file.contents)
            .await
            .map_err(|source| ScaffoldError::FileWrite {
                path: file.path.clone(),
                source,
            })?;
        written.push(file.path.clone());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectName;
    use crate::templates::TemplateSet;
    use std::path::Path;

    const EXPECTED_PATHS: [&str; 8] = [
        "Cargo.toml",
        ".env",
        ".gitignore",
        "src/main.rs",
        "src/commands/mod.rs",
        "src/commands/ping.rs",
        "src/events/mod.rs",
        "src/events/join.rs",
    ];

    fn plan_for(root: &Path, name: &str) -> ScaffoldPlan {
        let name = ProjectName::new(name).unwrap();
        ScaffoldPlan::new(root, TemplateSet::builtin().render(&name))
    }

    fn read_tree(root: &Path) -> Vec<(String, String)> {
        EXPECTED_PATHS
            .iter()
            .map(|&rel| {
                let contents = std::fs::read_to_string(root.join(rel)).unwrap();
                (rel.to_string(), contents)
            })
            .collect()
    }

    #[tokio::test]
    async fn writes_the_complete_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");

        let written = materialize(&plan_for(&root, "my-bot")).await.unwrap();

        assert_eq!(written.len(), 8);
        for rel in EXPECTED_PATHS {
            assert!(root.join(rel).is_file(), "missing {}", rel);
        }
        let manifest = std::fs::read_to_string(root.join("Cargo.toml")).unwrap();
        assert!(manifest.contains("name = \"my-bot\""));
    }

    #[tokio::test]
    async fn writes_nothing_beyond_the_plan() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");

        materialize(&plan_for(&root, "my-bot")).await.unwrap();

        let mut count = 0;
        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    pending.push(path);
                } else {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[tokio::test]
    async fn separate_runs_produce_identical_trees() {
        let tmp = tempfile::tempdir().unwrap();
        let first = tmp.path().join("a/my-bot");
        let second = tmp.path().join("b/my-bot");

        materialize(&plan_for(&first, "my-bot")).await.unwrap();
        materialize(&plan_for(&second, "my-bot")).await.unwrap();

        assert_eq!(read_tree(&first), read_tree(&second));
    }

    #[tokio::test]
    async fn rerun_discards_manual_edits() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");
        let plan = plan_for(&root, "my-bot");

        materialize(&plan).await.unwrap();
        let pristine = read_tree(&root);

        std::fs::write(root.join(".env"), "DISCORD_TOKEN=edited").unwrap();
        materialize(&plan).await.unwrap();

        assert_eq!(read_tree(&root), pristine);
    }

    #[tokio::test]
    async fn tolerates_a_pre_existing_target() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::write(root.join("notes.txt"), "keep me").unwrap();

        materialize(&plan_for(&root, "my-bot")).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("notes.txt")).unwrap(),
            "keep me"
        );
        assert!(root.join("Cargo.toml").is_file());
    }

    #[tokio::test]
    async fn file_failure_aborts_remaining_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");

        // A directory squatting on the 4th planned file makes its write fail.
        std::fs::create_dir_all(root.join("src/main.rs")).unwrap();

        let err = materialize(&plan_for(&root, "my-bot")).await.unwrap_err();

        match &err {
            ScaffoldError::FileWrite { path, .. } => {
                assert_eq!(path, &root.join("src/main.rs"));
            }
            other => panic!("expected FileWrite, got {:?}", other),
        }
        assert_eq!(err.path(), Some(&root.join("src/main.rs")));

        // Files before the failure exist with correct content.
        assert!(root.join("Cargo.toml").is_file());
        assert!(root.join(".env").is_file());
        assert!(root.join(".gitignore").is_file());
        assert_eq!(
            std::fs::read_to_string(root.join(".env")).unwrap(),
            "DISCORD_TOKEN=your_token_here\nCOMMAND_PREFIX=!"
        );

        // Files after the failure were never attempted.
        assert!(!root.join("src/commands/mod.rs").exists());
        assert!(!root.join("src/commands/ping.rs").exists());
        assert!(!root.join("src/events/mod.rs").exists());
        assert!(!root.join("src/events/join.rs").exists());
    }

    #[tokio::test]
    async fn directory_failure_attempts_no_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-bot");

        // A file squatting on a planned directory makes creation fail.
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("src"), "not a directory").unwrap();

        let err = materialize(&plan_for(&root, "my-bot")).await.unwrap_err();

        match &err {
            ScaffoldError::PathCreation { path, .. } => {
                assert_eq!(path, &root.join("src"));
            }
            other => panic!("expected PathCreation, got {:?}", other),
        }
        assert!(!root.join("Cargo.toml").exists());
    }
}
