use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "move selection"),
    ("g / G", "first / last row"),
    ("space, Enter", "toggle checkbox (file or whole directory)"),
    ("l / →", "expand directory"),
    ("h / ←", "collapse directory / jump to parent"),
    ("Tab / Shift-Tab", "cycle panel focus"),
    ("Ctrl-s", "save filter values as startup defaults"),
    ("Esc", "leave filter field / close help"),
    ("?", "toggle this help"),
    ("q, Ctrl-c", "quit"),
];

/// Render the help overlay centered above all panels.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, (KEYS.len() + 4) as u16, area);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<16}", key),
                    Style::default()
                        .fg(theme.accent_fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused_fg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
