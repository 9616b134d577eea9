//! Font scale commands.
//!
//! The font scale is the only preference that survives between runs, so
//! these commands work directly against the preference storage.

use clap::Subcommand;

use crate::cli::context::SiteOptions;
use crate::config;
use crate::constants::font::{MAX_FONT_SIZE_INCREASE, MIN_FONT_SIZE_INCREASE};
use crate::error::GitinbitError;
use crate::state::{Action, UiStore};

/// Font scale commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum FontCommands {
    /// Print the persisted font scale.
    Get,

    /// Persist a new font scale between 1.0 and 1.5.
    Set {
        /// The scale factor, e.g. 1.2.
        value: f64,
    },

    /// Reset the font scale to 1.0.
    Reset,
}

/// Execute font subcommands.
///
/// # Errors
///
/// Returns an error if the new value is out of range.
pub fn execute(options: &SiteOptions, cmd: &FontCommands) -> Result<(), GitinbitError> {
    let store = UiStore::new(options.open_storage(config::get_config()));

    match cmd {
        FontCommands::Get => {}
        FontCommands::Set { value } => set(&store, *value)?,
        FontCommands::Reset => set(&store, MIN_FONT_SIZE_INCREASE)?,
    }

    println!("{}", store.state().font_size_increase);
    Ok(())
}

fn set(store: &UiStore, value: f64) -> Result<(), GitinbitError> {
    store.dispatch(Action::SetFontSizeIncrease(value)).map_err(|_| {
        GitinbitError::InvalidArguments(format!(
            "Font scale must be between {MIN_FONT_SIZE_INCREASE} and {MAX_FONT_SIZE_INCREASE}, got {value}"
        ))
    })?;
    tracing::debug!(font_size_increase = value, "font scale saved");
    Ok(())
}
