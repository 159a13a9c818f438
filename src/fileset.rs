use crate::utils::normalize_relative;
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum FileSetError {
    #[error("path '{path}' is not a relative path inside the project root")]
    #[diagnostic(
        code(session_scaffold::fileset::invalid_path),
        help("Use a non-empty relative path that does not climb above the root with '..'")
    )]
    InvalidPath { path: PathBuf },

    #[error("path '{path}' was added more than once")]
    #[diagnostic(
        code(session_scaffold::fileset::duplicate_path),
        help("Remove one of the entries or pass --overwrite to keep the last one")
    )]
    DuplicatePath { path: PathBuf },
}

/// What happens when a path is inserted into a [`FileSet`] a second time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`FileSetError::DuplicatePath`].
    #[default]
    Reject,
    /// Last write wins; the entry keeps its original position.
    Overwrite,
}

/// A single file to be materialized on disk, relative to a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec<'a> {
    pub path: &'a Path,
    pub content: &'a str,
}

/// Ordered collection of [`FileSpec`]s, unique by path.
///
/// Iteration follows insertion order so progress output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    entries: IndexMap<PathBuf, String>,
    policy: DuplicatePolicy,
}
impl FileSet {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            entries: IndexMap::new(),
            policy,
        }
    }

    /// Adds `content` at `path`.
    ///
    /// # Errors
    ///
    /// - [`FileSetError::InvalidPath`] if `path` is absolute, empty or escapes the root.
    /// - [`FileSetError::DuplicatePath`] if `path` is already present and the policy is
    ///   [`DuplicatePolicy::Reject`].
    pub fn insert<P: AsRef<Path>, C: Into<String>>(
        &mut self,
        path: P,
        content: C,
    ) -> Result<(), FileSetError> {
        let raw = path.as_ref();

        let normalized = normalize_relative(raw).ok_or_else(|| FileSetError::InvalidPath {
            path: raw.to_path_buf(),
        })?;

        if self.entries.contains_key(&normalized) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(FileSetError::DuplicatePath { path: normalized });
                }
                DuplicatePolicy::Overwrite => {
                    log::debug!("overwriting earlier entry for {}", normalized.display());
                }
            }
        }

        // IndexMap::insert keeps the original slot for an existing key
        self.entries.insert(normalized, content.into());

        Ok(())
    }

    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        let normalized = normalize_relative(path.as_ref())?;

        self.entries.get(&normalized).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = FileSpec<'_>> {
        self.entries.iter().map(|(path, content)| FileSpec {
            path: path.as_path(),
            content: content.as_str(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }
}
