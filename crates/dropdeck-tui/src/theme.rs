use ratatui::style::{Color, Modifier, Style};

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const DROPPABLE_BORDER: Color = Color::Yellow;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const ERROR_TEXT: Color = Color::Red;
pub const PEOPLE_BADGE: Color = Color::Green;

pub const POPUP_BG: Color = Color::Black;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn droppable_border() -> Style {
    Style::default()
        .fg(DROPPABLE_BORDER)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_TEXT)
}

pub fn people_badge() -> Style {
    Style::default().fg(PEOPLE_BADGE)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
