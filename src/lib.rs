//! Generates the `n8n-nodes-session` community node package: a credential, a webhook trigger
//! node, an action node, their icons and a package manifest.
//!
//! The core is [`scaffold::scaffold`], which writes an ordered [`fileset::FileSet`] under a
//! project root. [`api::generate`] wires config, templates and the scaffolder together.

pub mod api;
pub mod blueprint;
pub mod config;
pub mod errors;
pub mod fileset;
mod preview;
mod prompt;
pub mod scaffold;
mod utils;

pub use api::{generate, GenerateOptions, Outcome, RunMode, ScaffoldAppError};
pub use fileset::{DuplicatePolicy, FileSet, FileSpec};
pub use scaffold::{scaffold, ScaffoldReport};
