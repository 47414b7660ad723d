mod cli;
mod cmd;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Commands, ConfigAction};
use cmd::render::RenderContext;
use shellansi::config::{self, Config};
use shellansi::ShellKind;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shellansi")]
#[command(about = "Shell-aware ANSI escape sequences for prompts", long_about = None)]
struct Args {
    /// Target shell (zsh, bash, fish; anything else produces plain escapes)
    #[arg(short, long, global = true)]
    shell: Option<String>,

    /// Config file to use instead of discovering one
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => config::load_single_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load(&config::discover()).context("Failed to load config")?,
    };
    let overrides = Config {
        shell: args.shell.as_deref().map(ShellKind::from_name),
        ..Default::default()
    };
    Ok(loaded.merge(overrides))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let command = match &args.command {
        Commands::Config { action } => {
            let result = match action {
                ConfigAction::Validate => cmd::config::validate(args.config.as_deref()),
                ConfigAction::Show => cmd::config::show(args.config.as_deref()),
            };
            if let Err(code) = result {
                std::process::exit(code);
            }
            return Ok(());
        }
        Commands::Render(command) => command,
    };

    let config = load_config(&args)?;
    tracing::debug!(shell = %config.shell_or_default(), "rendering");

    let output = RenderContext::new(config).render(command);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush()?;

    Ok(())
}
