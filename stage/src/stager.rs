use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use ignore::{DirEntry, WalkBuilder};

/// Headers and the template fragments they include.
const STAGED_SUFFIXES: [&str; 2] = [".h", ".tcc"];

pub fn is_staged_file(name: &str) -> bool {
    STAGED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[derive(Debug, Clone)]
pub struct StageTree {
    pub root: PathBuf,
    /// Where the tree lands, relative to the staging root. Empty for the root itself.
    pub prefix: PathBuf,
}

#[derive(Debug, Default)]
pub struct StageReport {
    /// Destination paths, in walk order.
    pub copied: Vec<PathBuf>,
}

pub struct Stager {
    dst_dir: PathBuf,
    trees: Vec<StageTree>,
}

impl Stager {
    pub fn new(dst_dir: impl Into<PathBuf>) -> Self {
        Self {
            dst_dir: dst_dir.into(),
            trees: Vec::new(),
        }
    }

    #[must_use]
    pub fn tree(mut self, root: impl Into<PathBuf>, prefix: impl Into<PathBuf>) -> Self {
        self.trees.push(StageTree {
            root: root.into(),
            prefix: prefix.into(),
        });
        self
    }

    pub fn run(&self) -> anyhow::Result<StageReport> {
        let mut report = StageReport::default();

        for tree in &self.trees {
            tracing::info!(
                "stage tree: {} -> {}",
                tree.root.display(),
                self.dst_dir.join(&tree.prefix).display()
            );
            self.stage_tree(tree, &mut report)?;
        }

        Ok(report)
    }

    fn stage_tree(&self, tree: &StageTree, report: &mut StageReport) -> anyhow::Result<()> {
        if !tree.root.is_dir() {
            bail!("source tree is not a directory: {}", tree.root.display());
        }

        let walker = WalkBuilder::new(&tree.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry =
                entry.with_context(|| format!("failed to walk: {}", tree.root.display()))?;

            if !is_file(&entry) || !is_staged_file(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let src_path = entry.path();
            let rel_path = src_path.strip_prefix(&tree.root).with_context(|| {
                format!("cannot get relative path for {}", src_path.display())
            })?;

            let dst_path = self.dst_dir.join(&tree.prefix).join(rel_path);
            copy_file(src_path, &dst_path)?;
            report.copied.push(dst_path);
        }

        Ok(())
    }
}

// symlinks are not followed while walking, but a link to a file still counts
fn is_file(entry: &DirEntry) -> bool {
    entry
        .file_type()
        .is_some_and(|ty| ty.is_file() || (ty.is_symlink() && entry.path().is_file()))
}

fn copy_file(src_path: &Path, dst_path: &Path) -> anyhow::Result<()> {
    // only create dir when needed
    if let Some(parent) = dst_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir: {}", parent.display()))?;
    }

    tracing::debug!("copy file: {} -> {}", src_path.display(), dst_path.display());
    fs::copy(src_path, dst_path).with_context(|| {
        format!(
            "failed to copy {} to {}",
            src_path.display(),
            dst_path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_suffixes() {
        assert!(is_staged_file("mp4v2.h"));
        assert!(is_staged_file("impl.tcc"));
        assert!(is_staged_file(".h"));

        assert!(!is_staged_file("mp4file.cpp"));
        assert!(!is_staged_file("notes.hpp"));
        assert!(!is_staged_file("header.h.in"));
        assert!(!is_staged_file("h"));
    }

    #[test]
    fn trees_keep_insertion_order() {
        let stager = Stager::new("out")
            .tree("a", "first")
            .tree("b", "");

        let prefixes: Vec<_> = stager.trees.iter().map(|t| t.prefix.clone()).collect();
        assert_eq!(prefixes, [PathBuf::from("first"), PathBuf::new()]);
    }
}
