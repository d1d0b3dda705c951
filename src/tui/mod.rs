//! Interactive single-select prompt.
//!
//! Commands talk to the picker through the [`Selector`] trait; [`TerminalSelector`] is the
//! full-screen ratatui implementation used by the binary.
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
pub mod timestamps;

pub use app::{Picker, PickerOutcome};
pub use events::{Action, key_to_action};
use terminal::TerminalManager;
pub use timestamps::format_timestamp;
use tracing::debug;

use crate::error::{Error, Result};

/// Choose one of `labels`
pub trait Selector {
    /// Returns the chosen index, or `None` if the user cancelled
    fn select(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>>;
}

/// Alternate-screen list picker on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn select(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>> {
        if labels.is_empty() {
            return Ok(None);
        }
        debug!(prompt, count = labels.len(), "opening picker");

        let mut manager = TerminalManager::new().map_err(Error::Prompt)?;
        let mut picker = Picker::new(prompt, labels.to_vec());
        let choice = picker.run(manager.terminal_mut()).map_err(Error::Prompt)?;
        manager.restore().map_err(Error::Prompt)?;

        Ok(choice)
    }
}
