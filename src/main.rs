//! Prompt Tags CLI
//!
//! Usage:
//!   prompt-tags [OPTIONS] <COMMAND>
//!
//! Commands:
//!   render   Expand placeholder tags in a prompt
//!   check    Report tags that have no placeholder
//!
//! Options:
//!   -c, --config <FILE>   Session configuration (TOML format)
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use prompt_tags::config::catalog_from_file;
use prompt_tags::{
    render, unknown_tags, Catalog, Clipboard, RenderPass, SessionConfig, SystemClipboard,
};

#[derive(Parser)]
#[command(name = "prompt-tags")]
#[command(about = "Reusable prompts with named placeholder tags")]
struct Cli {
    /// Session configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand placeholder tags in a prompt
    Render {
        /// Prompt file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Placeholder catalog file (TOML format)
        #[arg(short = 'p', long)]
        catalog: Option<PathBuf>,

        /// Produce the export text, wrapping tag-mode placeholders
        #[arg(long)]
        copyable: bool,

        /// Also copy the output to the clipboard. On Linux the command keeps
        /// running until another program takes over the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Report tags that have no placeholder
    Check {
        /// Prompt file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Placeholder catalog file (TOML format)
        #[arg(short = 'p', long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SessionConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };

    match cli.command {
        Command::Render {
            input,
            catalog,
            copyable,
            copy,
        } => {
            let catalog = load_catalog(catalog.as_deref(), &mut config);
            let source = read_input(input.as_deref());
            let pass = if copyable {
                RenderPass::Copyable
            } else {
                RenderPass::Full
            };
            log::debug!("rendering {} pass with {} placeholders", pass, catalog.len());

            let output = render(&source, catalog.iter(), &pass);
            print!("{}", output);
            if let Err(e) = io::stdout().flush() {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }

            if copy {
                let mut clipboard =
                    Clipboard::system_with(SystemClipboard::new().wait_until_replaced(true));
                if !clipboard.copy(&output) {
                    eprintln!("Error: could not copy to the clipboard");
                    std::process::exit(1);
                }
            }
        }
        Command::Check { input, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), &mut config);
            let source = read_input(input.as_deref());
            let filename = input
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<stdin>".to_string());

            let diagnostics = unknown_tags(&source, &catalog);
            for diag in &diagnostics {
                eprint!("{}", diag.format(&source, &filename));
            }
            if !diagnostics.is_empty() {
                std::process::exit(1);
            }
        }
    }
}

fn load_catalog(path: Option<&Path>, config: &mut SessionConfig) -> Catalog {
    match path {
        Some(path) => match catalog_from_file(path, &mut config.palette) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Catalog::new(),
    }
}

fn read_input(path: Option<&Path>) -> String {
    match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
