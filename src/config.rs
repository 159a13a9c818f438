use crate::{
    errors::{FileOperation, IoError, IoResultExt},
    fileset::DuplicatePolicy,
};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(session_scaffold::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(session_scaffold::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Generator settings read from a TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub project_name: Option<String>,
    pub documentation_url: Option<String>,
    pub default_base_url: Option<String>,
    pub template_dir: Option<PathBuf>,
    pub on_duplicate: Option<DuplicatePolicy>,
}
impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).on_path(FileOperation::Read, path)?;

        let mut parsed: Config = toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?;

        // relative paths point next to the file; joining an absolute path keeps it as is
        if let Some(config_dir) = path.parent() {
            parsed.template_dir = parsed.template_dir.map(|dir| config_dir.join(dir));
        }

        log::debug!("loaded config from {}", path.display());

        Ok(parsed)
    }
}
