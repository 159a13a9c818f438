use crate::{
    errors::{FileOperation, IoError, IoResultExt},
    fileset::FileSet,
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error while writing the project")]
    #[diagnostic(code(session_scaffold::scaffold::io))]
    Io(#[from] IoError),
}

/// Paths written by a successful [`scaffold`] run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub written: Vec<PathBuf>,
}

/// Writes every entry of `files` under `root`.
///
/// Entries are processed in insertion order. For each one the missing parent directories are
/// created, then the whitespace-trimmed content is written, replacing any existing file. A
/// `create <path>` line is printed after every write and a completion line at the end.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first directory or file that cannot be created. Files
/// written before the failure are left in place.
pub fn scaffold(root: &Path, files: &FileSet) -> Result<ScaffoldReport, ScaffoldError> {
    println!("Creating project structure inside '{}'...", root.display());

    let mut report = ScaffoldReport::default();

    for spec in files.iter() {
        let final_path = root.join(spec.path);

        if let Some(parent) = final_path.parent() {
            create_directory(parent)?;
        }

        write_file(&final_path, spec.content.trim())?;

        report.written.push(final_path);
    }

    println!("\n{}", "Project files created successfully!".bold().green());

    log::debug!("wrote {} files under {}", report.written.len(), root.display());

    Ok(report)
}
/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).on_path(FileOperation::Mkdir, path)?;

    Ok(())
}
/// Writes `contents` to `path`, truncating an existing file, and reports it on stdout.
fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).on_path(FileOperation::Write, path)?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}
