use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, InputField};
use crate::theme::Theme;

/// Render the include/exclude filter fields side by side.
///
/// The include field is default-deny (non-empty hides everything unmatched);
/// the exclude field is default-allow. Edits apply after a short quiet
/// period, driven by the tick loop.
pub fn render(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_field(
        frame,
        halves[0],
        " Include (only show) ",
        &app.include_field,
        app.focus == Focus::IncludeField,
        theme,
    );
    render_field(
        frame,
        halves[1],
        " Exclude (hide) ",
        &app.exclude_field,
        app.focus == Focus::ExcludeField,
        theme,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &InputField,
    focused: bool,
    theme: &Theme,
) {
    let border_fg = if focused {
        theme.border_focused_fg
    } else {
        theme.border_fg
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg));
    frame.render_widget(Paragraph::new(field.value.as_str()).block(block), area);

    if focused {
        let cursor_cols = field.value[..field.cursor].chars().count() as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + cursor_cols, area.y + 1));
    }
}
