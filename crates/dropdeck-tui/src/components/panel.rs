use crate::theme::{droppable_border, focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub focused_title: &'a str,
    pub droppable_title: &'a str,
    pub is_focused: bool,
    pub is_droppable: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            focused_title: title,
            droppable_title: title,
            is_focused: false,
            is_droppable: false,
        }
    }

    pub fn with_focus_indicator(mut self, focused_title: &'a str) -> Self {
        self.focused_title = focused_title;
        self
    }

    pub fn with_drop_indicator(mut self, droppable_title: &'a str) -> Self {
        self.droppable_title = droppable_title;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn droppable(mut self, droppable: bool) -> Self {
        self.is_droppable = droppable;
        self
    }

    pub fn border_style(&self) -> ratatui::style::Style {
        if self.is_droppable {
            droppable_border()
        } else if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_text(&self) -> &str {
        if self.is_droppable {
            self.droppable_title
        } else if self.is_focused {
            self.focused_title
        } else {
            self.title
        }
    }

    pub fn block(&'a self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_text())
    }
}

pub fn render_panel<'a>(
    frame: &mut Frame,
    area: Rect,
    config: &PanelConfig<'a>,
    content: Paragraph<'a>,
) {
    let widget = content.block(config.block());
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_droppable_wins_over_focused() {
        let config = PanelConfig::new("Finished")
            .with_focus_indicator("Finished [2]")
            .with_drop_indicator("Finished [drop]")
            .focused(true)
            .droppable(true);
        assert_eq!(config.title_text(), "Finished [drop]");
        assert_eq!(config.border_style(), droppable_border());
    }

    #[test]
    fn test_focused_title() {
        let config = PanelConfig::new("Active")
            .with_focus_indicator("Active [1]")
            .focused(true);
        assert_eq!(config.title_text(), "Active [1]");
    }
}
