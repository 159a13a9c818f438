use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The filesystem step that failed. Shown in the error message, e.g.
/// `I/O error: creating a directory on path 'out/nodes'`.
#[derive(Debug, Error, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("writing a file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
}
/// A platform I/O failure tagged with the step and path it happened on.
///
/// Every domain error (config, blueprint, scaffold) wraps this one, so the underlying
/// [`std::io::Error`] always reaches the user unchanged as the diagnostic's source.
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(code(session_scaffold::io))]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
    #[help]
    advice: &'static str,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        let advice = Self::advice_for(operation, error.kind());

        Self {
            operation,
            path,
            source: error,
            advice,
        }
    }

    fn advice_for(operation: FileOperation, kind: std::io::ErrorKind) -> &'static str {
        match (operation, kind) {
            (_, std::io::ErrorKind::PermissionDenied) => {
                "Check the permissions of this path or choose another destination."
            }
            (FileOperation::Read, std::io::ErrorKind::NotFound) => {
                "The path does not exist; relative paths in a config file are resolved against the file's directory."
            }
            (FileOperation::Mkdir, _) => {
                "A parent of this path may be a regular file rather than a directory."
            }
            _ => "Check file permissions, disk space, or that the path is correct.",
        }
    }
}

/// Tags a [`std::io::Result`] with the operation and path it was produced by.
pub trait IoResultExt<T> {
    fn on_path(self, operation: FileOperation, path: &Path) -> Result<T, IoError>;
}
impl<T> IoResultExt<T> for std::io::Result<T> {
    fn on_path(self, operation: FileOperation, path: &Path) -> Result<T, IoError> {
        self.map_err(|error| IoError::new(operation, path.to_path_buf(), error))
    }
}
