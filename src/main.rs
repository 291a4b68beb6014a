use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use cspconf::config::{ProjectConfig, DEFAULT_PROJECT_FILE, ENV_NAME_VAR};
use cspconf::logging::init_tracing;
use cspconf::options::{
    enum_constraints, option_registry, resolve_environment, BuildArtifacts, OptionKind,
};

#[derive(Parser)]
#[command(name = "cspconf")]
#[command(about = "Resolve CSP build options into source filters and link settings")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one build environment and print its build settings
    Resolve {
        /// Project file with [env.NAME] tables
        #[arg(short, long, default_value = DEFAULT_PROJECT_FILE)]
        project: PathBuf,

        /// Environment to resolve (falls back to $PIOENV, then default_env)
        #[arg(short, long)]
        env: Option<String>,

        /// Read option text from stdin instead of the project file
        #[arg(long, conflicts_with = "project")]
        stdin: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every recognized option
    Options,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// KEY=value lines, space separated
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            project,
            env,
            stdin,
            format,
        } => resolve(project, env, stdin, format),
        Commands::Options => {
            print!("{}", render_options());
            Ok(())
        }
    }
}

fn resolve(
    project: PathBuf,
    env: Option<String>,
    stdin: bool,
    format: OutputFormat,
) -> Result<()> {
    let process_env = std::env::var(ENV_NAME_VAR).ok();

    let (environment, raw) = if stdin {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("reading options from stdin")?;
        let name = env.or(process_env).unwrap_or_else(|| "stdin".to_string());
        (name, raw)
    } else {
        let config = ProjectConfig::load(&project)?;
        let name = config.select_environment(env.as_deref(), process_env.as_deref())?;
        let raw = config.options_for(&name)?.to_string();
        (name, raw)
    };

    let resolved = resolve_environment(&environment, &raw)?;
    for warning in &resolved.warnings {
        tracing::warn!(environment = %resolved.environment, "{}", warning);
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(&resolved.artifacts)),
        OutputFormat::Json => println!("{}", render_json(&resolved.artifacts)?),
    }
    Ok(())
}

fn render_text(artifacts: &BuildArtifacts) -> String {
    format!(
        "SRC_FILTER={}\nLIBS={}\nCFLAGS={}\n",
        artifacts.src_filter.join(" "),
        artifacts.libs.join(" "),
        artifacts.extra_flags.join(" ")
    )
}

fn render_json(artifacts: &BuildArtifacts) -> serde_json::Result<String> {
    serde_json::to_string_pretty(artifacts)
}

fn render_options() -> String {
    let mut out = String::new();
    for def in option_registry() {
        let allowed = enum_constraints()
            .iter()
            .find(|c| c.key == def.key)
            .map(|c| format!(" Must be one of: [{}]", c.allowed.join(", ")))
            .unwrap_or_default();
        let kind = match def.kind {
            OptionKind::Switch => "switch",
            OptionKind::Value { .. } => "value",
        };
        out.push_str(&format!(
            "{:<28} {:<7} {}.{}\n",
            def.usage(),
            kind,
            def.description,
            allowed
        ));
    }
    out
}
