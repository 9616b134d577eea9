//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `font` - Persisted font scale commands
//! - `replay` - Scripted event replay
//! - `view` - Chrome, article and listing commands

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use super::context::SiteOptions;
use crate::error::GitinbitError;
use crate::{config, schema};

pub mod config_cmd;
pub mod font;
pub mod replay;
pub mod view;

pub use config_cmd::ConfigCommands;
pub use font::FontCommands;
pub use view::ViewArg;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Viewport width used when none is given.
const DEFAULT_WIDTH: u32 = 1280;

/// gitinbit CLI - inspect the blog's UI state and layout.
#[derive(Parser, Debug)]
#[command(name = "gitinbit")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Content JSON file. Overrides `contentPath` from the configuration.
    #[arg(long, global = true, value_name = "PATH", env = "GITINBIT_CONTENT")]
    pub content: Option<PathBuf>,

    /// Preference storage file. Overrides `ui.storagePath`.
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "ephemeral")]
    pub storage: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is read from or written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the chrome (navigator, actions bar, info panel) for a viewport.
    Chrome {
        /// Viewport width in pixels.
        #[arg(long, short, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// View being entered before the chrome is composed.
        #[arg(long, value_enum, default_value_t = ViewArg::Index)]
        view: ViewArg,

        /// Also show the load state of each chrome slot.
        #[arg(long)]
        slots: bool,
    },

    /// Render a post or page with its SEO tags.
    Article {
        /// Slug of the post or page, e.g. `/hello-world/`.
        slug: String,

        /// Viewport width in pixels.
        #[arg(long, short, default_value_t = DEFAULT_WIDTH)]
        width: u32,
    },

    /// List post categories in display order.
    Categories {
        /// Print as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// List posts in navigator order.
    Posts {
        /// Only list posts in this category.
        #[arg(long)]
        category: Option<String>,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Read or change the persisted font scale.
    #[command(subcommand)]
    Font(FontCommands),

    /// Replay a scripted sequence of UI events and print each state change.
    ///
    /// The script is a JSON array of steps, read from a file or from stdin
    /// when the path is `-`.
    #[command(after_long_help = r#"Steps:
  { "step": "resize", "width": 800 }
  { "step": "advance", "ms": 500 }
  { "step": "view", "view": "post" }
  { "step": "dispatch", "action": { "type": "SET_FONT_SIZE_INCREASE", "payload": 1.2 } }"#)]
    Replay {
        /// Script file, or `-` for stdin.
        script: PathBuf,

        /// Initial viewport width in pixels.
        #[arg(long, short, default_value_t = DEFAULT_WIDTH)]
        width: u32,
    },

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output gitinbit configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(gitinbit completions --shell zsh)"
    ///   gitinbit completions --shell fish > ~/.config/fish/completions/gitinbit.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    fn site_options(&self) -> SiteOptions {
        SiteOptions {
            content: self.content.clone(),
            storage: self.storage.clone(),
            ephemeral: self.ephemeral,
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), GitinbitError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(GitinbitError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        let options = self.site_options();
        match &self.command {
            Commands::Chrome { width, view, slots } => view::chrome(&options, *width, *view, *slots),
            Commands::Article { slug, width } => view::article(&options, slug, *width),
            Commands::Categories { json } => view::categories(&options, *json),
            Commands::Posts { category, json } => view::posts(&options, category.as_deref(), *json),
            Commands::Font(cmd) => font::execute(&options, cmd),
            Commands::Replay { script, width } => replay::execute(&options, script, *width),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "gitinbit", &mut io::stdout());
    }
}
