use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::{diff_list, filter_bar, help, status_bar, tree::TreeWidget};
use crate::theme::Theme;

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let theme = Theme::default();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    filter_bar::render(app, frame, chunks[0], &theme);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    // Keep the selected tree row inside the visible window.
    let visible_height = panels[0].height.saturating_sub(2) as usize;
    app.view.update_scroll(visible_height);

    let is_tree_focused = app.focus == Focus::Tree;
    let tree_block = Block::default()
        .title(format!(" Files ({}) ", app.entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_tree_focused {
            theme.border_focused_fg
        } else {
            theme.border_fg
        }));
    let tree_widget =
        TreeWidget::new(&app.view, &app.entries, &app.selection, &theme).block(tree_block);
    frame.render_widget(tree_widget, panels[0]);

    diff_list::render(app, frame, panels[1], &theme);
    status_bar::render(app, frame, chunks[2], &theme);

    if app.show_help {
        help::render(frame, area, &theme);
    }
}
