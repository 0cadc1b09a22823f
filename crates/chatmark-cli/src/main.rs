use anyhow::{Context, Result};
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{io, parse, to_html, to_plain_text};
use clap::{Parser, ValueEnum};
use std::io::{IsTerminal, stdin, stdout};
use std::path::{Path, PathBuf};

mod view;
mod viewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Html,
    Json,
    Plain,
    View,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::View => OutputFormat::View,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about = "Parse a chat message and show its structure")]
struct Cli {
    /// Message file to read; omit or pass `-` to read stdin
    path: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable soft wrapping in the viewer
    #[arg(long)]
    no_wrap: bool,

    /// Store the effective format and wrap settings as the new defaults
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = effective_config(&cli)?;
    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        log::info!("Saved config with format {:?}", config.format);
    }

    let (message, title) = read_input(cli.path.as_deref())?;
    let doc = parse(&message);
    log::info!("Parsed {} blocks from {title}", doc.len());

    match effective_format(config.format, stdout().is_terminal()) {
        OutputFormat::Html => print!("{}", to_html(&doc)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
        OutputFormat::Plain => println!("{}", to_plain_text(&doc)),
        OutputFormat::View => viewer::run(view::document_lines(&doc), &title, config.wrap)?,
    }

    Ok(())
}

/// Command-line flags override the config file, which overrides the defaults.
fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config file")?;
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if cli.no_wrap {
        config.wrap = false;
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let message = io::read_message(path)
                .with_context(|| format!("Failed to read message from {}", path.display()))?;
            Ok((message, path.display().to_string()))
        }
        _ => {
            let message =
                io::read_message_from(stdin().lock()).context("Failed to read message from stdin")?;
            Ok((message, "stdin".to_string()))
        }
    }
}

/// The viewer needs a terminal; when stdout is redirected it prints plain text.
fn effective_format(requested: OutputFormat, stdout_is_terminal: bool) -> OutputFormat {
    if requested == OutputFormat::View && !stdout_is_terminal {
        log::debug!("stdout is not a terminal, falling back to plain output");
        OutputFormat::Plain
    } else {
        requested
    }
}
