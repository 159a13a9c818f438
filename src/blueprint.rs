use crate::{
    errors::{FileOperation, IoError, IoResultExt},
    fileset::{DuplicatePolicy, FileSet, FileSetError},
};
use miette::Diagnostic;
use serde::Serialize;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tera::{Context, Tera};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum BlueprintError {
    #[error("I/O error within blueprint domain")]
    #[diagnostic(code(session_scaffold::blueprint::io))]
    Io(#[from] IoError),

    #[error("Error occurred attempting to render template '{path}'")]
    #[diagnostic(
        code(session_scaffold::blueprint::render),
        help("Check the tera syntax; wrap n8n expressions in a raw block")
    )]
    Render {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("Error occurred attempting to build the template context")]
    #[diagnostic(code(session_scaffold::blueprint::context))]
    Context {
        #[source]
        source: tera::Error,
    },

    #[error("unable to strip prefix from directory")]
    #[diagnostic(code(session_scaffold::blueprint::strip_prefix))]
    StripPrefix {
        path: PathBuf,
        dir: PathBuf,
        source: std::path::StripPrefixError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    FileSet(#[from] FileSetError),
}

const TERA_FILE_EXTENSION: &str = "tera";

macro_rules! embedded {
    ($path:literal) => {
        Template {
            path: PathBuf::from($path),
            body: Cow::Borrowed(include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/n8n-nodes-session/",
                $path
            ))),
        }
    };
}

/// Values substituted into `.tera` templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateContext {
    pub project_name: String,
    pub documentation_url: String,
    pub default_base_url: String,
}
impl Default for TemplateContext {
    fn default() -> Self {
        Self {
            project_name: "n8n-nodes-session".to_string(),
            documentation_url: "https://github.com/obeone/n8n-nodes-session".to_string(),
            default_base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// One template file, keyed by its path relative to the project root.
#[derive(Debug, Clone)]
pub struct Template {
    pub path: PathBuf,
    pub body: Cow<'static, str>,
}
impl Template {
    fn is_tera(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext == TERA_FILE_EXTENSION)
            .unwrap_or(false)
    }
}

/// An ordered list of templates a [`FileSet`] is rendered from.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub templates: Vec<Template>,
}
impl Blueprint {
    /// The Session node package compiled into the binary: credential, trigger node, action
    /// node, their icons and the package manifest.
    pub fn embedded() -> Self {
        Self {
            templates: vec![
                embedded!("credentials/SessionApi.credentials.ts.tera"),
                embedded!("nodes/SessionTrigger/SessionTrigger.node.ts"),
                embedded!("nodes/SessionTrigger/session.svg"),
                embedded!("nodes/Session/Session.node.ts"),
                embedded!("nodes/Session/session.svg"),
                embedded!("package.json.tera"),
            ],
        }
    }

    /// Recursively walks `directory` and turns every file into a [`Template`].
    ///
    /// Entries are visited sorted by file name so the resulting order does not depend on the
    /// filesystem.
    pub fn from_dir(directory: &Path) -> Result<Self, BlueprintError> {
        let mut templates = Vec::new();

        for entry in WalkDir::new(directory).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(error) => {
                    let path = error.path().unwrap_or(directory).to_path_buf();

                    Err(IoError::new(FileOperation::Read, path, error.into()))?
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let full_path = entry.path();
            let relative = match full_path.strip_prefix(directory) {
                Ok(r) => r,
                Err(error) => Err(BlueprintError::StripPrefix {
                    path: full_path.to_path_buf(),
                    dir: directory.to_path_buf(),
                    source: error,
                })?,
            };

            let body =
                std::fs::read_to_string(full_path).on_path(FileOperation::Read, full_path)?;

            log::debug!("loaded template {}", relative.display());

            templates.push(Template {
                path: relative.to_path_buf(),
                body: Cow::Owned(body),
            });
        }

        Ok(Self { templates })
    }

    /// Renders every template into a [`FileSet`].
    ///
    /// `.tera` templates are rendered against `context` and written without the extension;
    /// every other template is taken verbatim.
    pub fn render(
        &self,
        context: &TemplateContext,
        policy: DuplicatePolicy,
    ) -> Result<FileSet, BlueprintError> {
        let tera_context = Context::from_serialize(context)
            .map_err(|error| BlueprintError::Context { source: error })?;

        let mut tera = Tera::default();

        let mut files = FileSet::new(policy);

        for template in &self.templates {
            if template.is_tera() {
                let rendered = tera
                    .render_str(&template.body, &tera_context)
                    .map_err(|error| BlueprintError::Render {
                        path: template.path.clone(),
                        source: error,
                    })?;

                let mut final_dest = template.path.clone();
                let file_stem = final_dest.file_stem().unwrap_or_default().to_owned();
                final_dest.set_file_name(file_stem);

                files.insert(final_dest, rendered)?;
            } else {
                files.insert(&template.path, template.body.as_ref())?;
            }
        }

        Ok(files)
    }
}
