use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Picker screen areas: the entry list above a one-row status bar
pub struct PickerLayout {
    pub list_area: Rect,
    pub status_area: Rect,
}

impl PickerLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self { list_area: chunks[0], status_area: chunks[1] }
    }
}
