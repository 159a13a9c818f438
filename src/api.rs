use crate::{
    blueprint::{self, Blueprint, TemplateContext},
    config::{self, Config},
    fileset::DuplicatePolicy,
    preview::preview_as_tree,
    prompt,
    scaffold::{self, ScaffoldReport},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldAppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Blueprint(#[from] blueprint::BlueprintError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write straight away.
    #[default]
    Write,
    /// Print the preview tree and stop.
    DryRun,
    /// Print the preview tree and ask before writing.
    Interactive,
}

/// Command line overrides. `None` falls back to the config file, then to the built-in default.
#[derive(Debug, Default, Clone)]
pub struct GenerateOptions {
    pub destination: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub project_name: Option<String>,
    pub documentation_url: Option<String>,
    pub default_base_url: Option<String>,
    pub overwrite: bool,
    pub mode: RunMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(ScaffoldReport),
    Previewed,
    Declined,
}

fn make_context(options: &GenerateOptions, config: &Config) -> TemplateContext {
    let defaults = TemplateContext::default();

    TemplateContext {
        project_name: options
            .project_name
            .clone()
            .or_else(|| config.project_name.clone())
            .unwrap_or(defaults.project_name),
        documentation_url: options
            .documentation_url
            .clone()
            .or_else(|| config.documentation_url.clone())
            .unwrap_or(defaults.documentation_url),
        default_base_url: options
            .default_base_url
            .clone()
            .or_else(|| config.default_base_url.clone())
            .unwrap_or(defaults.default_base_url),
    }
}

/// Generates the Session node package.
///
/// Settings are resolved from `options`, then the optional config file, then defaults. The
/// project is written to `destination`, or to `./<project_name>` when none is given.
///
/// # Errors
///
/// Returns a [`ScaffoldAppError`] if:
///
/// - The config file cannot be read or parsed.
/// - A template directory cannot be read or a template fails to render.
/// - Two templates resolve to the same path and duplicates are rejected.
/// - The confirmation prompt fails.
/// - A directory or file cannot be created or written to.
pub fn generate(options: &GenerateOptions) -> Result<Outcome, ScaffoldAppError> {
    generate_with(options, prompt::apply_changes)
}

/// [`generate`] with the `--interactive` confirmation supplied by the caller.
pub(crate) fn generate_with<F>(
    options: &GenerateOptions,
    confirm: F,
) -> Result<Outcome, ScaffoldAppError>
where
    F: FnOnce() -> Result<bool, prompt::PromptError>,
{
    let config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let context = make_context(options, &config);

    let policy = if options.overwrite {
        DuplicatePolicy::Overwrite
    } else {
        config.on_duplicate.unwrap_or_default()
    };

    let blueprint = match options.template_dir.as_ref().or(config.template_dir.as_ref()) {
        Some(dir) => {
            log::info!("loading templates from {}", dir.display());
            Blueprint::from_dir(dir)?
        }
        None => Blueprint::embedded(),
    };

    let files = blueprint.render(&context, policy)?;

    let root = options
        .destination
        .clone()
        .unwrap_or_else(|| PathBuf::from(&context.project_name));

    log::debug!(
        "rendered {} files for {} into {}",
        files.len(),
        context.project_name,
        root.display()
    );

    match options.mode {
        RunMode::Write => {}
        RunMode::DryRun => {
            preview_as_tree(&files, &root);
            return Ok(Outcome::Previewed);
        }
        RunMode::Interactive => {
            preview_as_tree(&files, &root);
            if !confirm()? {
                log::info!("user declined, nothing written");
                return Ok(Outcome::Declined);
            }
        }
    }

    let report = scaffold::scaffold(&root, &files)?;

    Ok(Outcome::Written(report))
}
