use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::layout::PickerLayout;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR: Color = Color::Rgb(24, 24, 27);

/// Draw the picker: labels with the selection highlighted, then the status bar
pub fn render_picker(frame: &mut Frame, prompt: &str, labels: &[String], state: &mut ListState) {
    let layout = PickerLayout::new(frame.area());

    render_list(frame, layout.list_area, prompt, labels, state);
    render_status_bar(frame, layout.status_area, prompt, state.selected(), labels.len());
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    labels: &[String],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = labels.iter().map(|label| ListItem::new(label.as_str())).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", prompt)),
        )
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, state);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    selected: Option<usize>,
    total: usize,
) {
    let position = match selected {
        Some(idx) if total > 0 => format!("entry {}/{}", idx + 1, total),
        _ => "no entries".to_string(),
    };
    let text = format!(" {} | {} | Enter: select | Esc: cancel ", prompt, position);

    let paragraph = Paragraph::new(text).style(Style::default().fg(BRIGHT).bg(BAR));
    frame.render_widget(paragraph, area);
}
