use crate::app::{App, AppMode};
use crate::components::{centered_rect, render_panel, PanelConfig};
use crate::form::{FormField, ProjectForm};
use crate::theme::*;
use dropdeck_core::InputState;
use dropdeck_domain::ProjectStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_board(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.mode == AppMode::CreateProject {
        render_create_project_popup(&app.form, frame);
    }
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_project_panel(app, frame, chunks[0], ProjectStatus::Active);
    render_project_panel(app, frame, chunks[1], ProjectStatus::Finished);
}

fn render_project_panel(app: &App, frame: &mut Frame, area: Rect, status: ProjectStatus) {
    let projection = app.projection(status).borrow();
    let selection = app.selection(status);
    let focused = app.focus == status;
    let droppable = app.drag.armed_target() == Some(status);

    let mut lines = vec![];
    if projection.is_empty() {
        let hint = match status {
            ProjectStatus::Active => "No active projects. Press 'n' to create one!",
            ProjectStatus::Finished => "Nothing finished yet.",
        };
        lines.push(Line::from(Span::styled(hint, label_text())));
    } else {
        for (idx, project) in projection.projects().iter().enumerate() {
            let selected = selection.is_selected(idx);
            let marker = if selected && focused && app.drag.is_dragging() {
                "\u{25c6} "
            } else if selected {
                "> "
            } else {
                "  "
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{}", marker, project.title),
                    selected_item(selected && focused).patch(normal_text()),
                ),
                Span::raw(" "),
                Span::styled(format!("({} people)", project.people), people_badge()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", project.description),
                label_text(),
            )));
        }
    }

    let (title, focus_title, drop_title) = match status {
        ProjectStatus::Active => (
            "Active Projects",
            "Active Projects [1]",
            "Active Projects [drop here]",
        ),
        ProjectStatus::Finished => (
            "Finished Projects",
            "Finished Projects [2]",
            "Finished Projects [drop here]",
        ),
    };
    let config = PanelConfig::new(title)
        .with_focus_indicator(focus_title)
        .with_drop_indicator(drop_title)
        .focused(focused)
        .droppable(droppable);

    render_panel(frame, area, &config, Paragraph::new(lines));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = if app.mode == AppMode::CreateProject {
        "Tab: next field | Enter: save | Esc: cancel"
    } else if app.drag.is_dragging() {
        "1/2/Tab: hover a list | Space/Enter: drop | Esc: cancel drag"
    } else {
        "n: new project | 1/2/Tab: focus | j/k: navigate | Space/Enter: grab | q: quit"
    };

    let footer = Paragraph::new(Line::from(Span::styled(help, label_text())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_create_project_popup(form: &ProjectForm, frame: &mut Frame) {
    let area = centered_rect(52, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focused_border())
        .title("New Project")
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_form_field(
        frame,
        chunks[0],
        "Title",
        &form.title,
        form.focus == FormField::Title,
    );
    render_form_field(
        frame,
        chunks[1],
        "Description",
        &form.description,
        form.focus == FormField::Description,
    );
    render_form_field(
        frame,
        chunks[2],
        "People (1-5)",
        &form.people,
        form.focus == FormField::People,
    );

    let status_line = match &form.error {
        Some(message) => Line::from(Span::styled(message.as_str(), error_text())),
        None => Line::from(Span::styled(
            "Enter: save | Tab: next field | Esc: cancel",
            label_text(),
        )),
    };
    frame.render_widget(Paragraph::new(status_line), chunks[3]);
}

fn render_form_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputState,
    focused: bool,
) {
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let inner_width = area.width.saturating_sub(2);
    let cursor = input.cursor() as u16;
    let scroll = field_scroll(cursor, inner_width);

    let field = Paragraph::new(input.as_str()).scroll((0, scroll)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label),
    );
    frame.render_widget(field, area);

    if focused && inner_width > 0 {
        frame.set_cursor_position(Position::new(
            area.x + 1 + (cursor - scroll).min(inner_width - 1),
            area.y + 1,
        ));
    }
}

/// Horizontal scroll that keeps the caret on the last visible column
/// once the text outgrows the field.
fn field_scroll(cursor: u16, inner_width: u16) -> u16 {
    cursor.saturating_sub(inner_width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_needs_no_scroll() {
        assert_eq!(field_scroll(0, 18), 0);
        assert_eq!(field_scroll(5, 18), 0);
    }

    #[test]
    fn test_cursor_on_last_column_needs_no_scroll() {
        assert_eq!(field_scroll(17, 18), 0);
    }

    #[test]
    fn test_caret_pinned_to_last_column_when_overflowing() {
        let inner_width = 18;
        for cursor in [18u16, 19, 40] {
            let scroll = field_scroll(cursor, inner_width);
            assert_eq!(cursor - scroll, inner_width - 1);
        }
    }

    #[test]
    fn test_zero_width_field_scrolls_everything() {
        // Degenerate rect: the caret is not drawn, the math must not
        // underflow.
        assert_eq!(field_scroll(5, 0), 5);
        assert_eq!(field_scroll(0, 0), 0);
    }
}
