//! Picker state and event loop.
//!
//! [`Picker`] owns the labels and the list selection. Key handling is kept apart from the
//! loop in [`Picker::handle_action`] so navigation can be tested without a terminal;
//! [`Picker::run`] drives it against any ratatui backend until the user selects or cancels.

use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::widgets::ListState;

use super::events::{Action, PAGE_SIZE, poll_event};
use super::rendering::render_picker;

/// How the picker loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(usize),
    Cancelled,
}

pub struct Picker {
    prompt: String,
    labels: Vec<String>,
    state: ListState,
    outcome: Option<PickerOutcome>,
    needs_redraw: bool,
}

impl Picker {
    pub fn new(prompt: impl Into<String>, labels: Vec<String>) -> Self {
        let selected = if labels.is_empty() { None } else { Some(0) };
        Self {
            prompt: prompt.into(),
            labels,
            state: ListState::default().with_selected(selected),
            outcome: None,
            needs_redraw: true,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn outcome(&self) -> Option<PickerOutcome> {
        self.outcome
    }

    /// Draw and handle keys until the user decides
    ///
    /// Returns the index of the chosen label, or `None` if the picker was cancelled.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<Option<usize>> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(match outcome {
                    PickerOutcome::Selected(idx) => Some(idx),
                    PickerOutcome::Cancelled => None,
                });
            }

            if self.needs_redraw {
                terminal.draw(|f| render_picker(f, &self.prompt, &self.labels, &mut self.state))?;
                self.needs_redraw = false;
            }

            let action = poll_event(Duration::from_millis(250))?;
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::First => self.move_selection(isize::MIN),
            Action::Last => self.move_selection(isize::MAX),
            Action::Select => {
                self.outcome = Some(match self.state.selected() {
                    Some(idx) => PickerOutcome::Selected(idx),
                    None => PickerOutcome::Cancelled,
                });
            }
            Action::Cancel => self.outcome = Some(PickerOutcome::Cancelled),
            // Poll timeouts also land here; redraw to pick up terminal resizes
            Action::None => self.needs_redraw = true,
        }
    }

    /// Move by `delta` rows, clamped to the list bounds
    fn move_selection(&mut self, delta: isize) {
        let Some(current) = self.state.selected() else {
            return;
        };
        let last = self.labels.len().saturating_sub(1);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs()).min(last)
        };

        if next != current {
            self.state.select(Some(next));
            self.needs_redraw = true;
        }
    }
}
