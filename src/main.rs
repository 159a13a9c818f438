use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use session_scaffold::{GenerateOptions, RunMode};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("destination")
                .help("Directory the project is created in [default: ./<project name>]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with generator settings")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("template-dir")
                .short('t')
                .long("template-dir")
                .help("Load templates from a directory instead of the built-in ones")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("project-name")
                .long("project-name")
                .help("npm package name of the generated project"),
        )
        .arg(
            Arg::new("docs-url")
                .long("docs-url")
                .help("Documentation URL shown on the credential"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Default Session webhook server URL"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help("Let a later template replace an earlier one with the same path")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Preview the files without writing them")
                .action(ArgAction::SetTrue)
                .conflicts_with("interactive"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Preview the files and ask before writing them")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    let options = build_options(&matches);

    session_scaffold::generate(&options)?;

    Ok(())
}

fn init_logger(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("executing in verbose mode");
}

fn build_options(args: &ArgMatches) -> GenerateOptions {
    let mode = if args.get_flag("dry-run") {
        RunMode::DryRun
    } else if args.get_flag("interactive") {
        RunMode::Interactive
    } else {
        RunMode::Write
    };

    GenerateOptions {
        destination: args.get_one::<PathBuf>("destination").cloned(),
        config: args.get_one::<PathBuf>("config").cloned(),
        template_dir: args.get_one::<PathBuf>("template-dir").cloned(),
        project_name: args.get_one::<String>("project-name").cloned(),
        documentation_url: args.get_one::<String>("docs-url").cloned(),
        default_base_url: args.get_one::<String>("base-url").cloned(),
        overwrite: args.get_flag("overwrite"),
        mode,
    }
}
