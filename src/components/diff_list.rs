use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, Focus};
use crate::theme::Theme;

/// Render the diff-order list of currently visible files.
///
/// Panels appear in the order computed once at setup (nested directories
/// first); hidden entries are simply absent.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let visible = app.visible_diff();
    let total = app.entries.len();
    let is_focused = app.focus == Focus::Diff;

    let title = format!(" Diff files ({}/{}) ", visible.len(), total);
    let border_fg = if is_focused {
        theme.border_focused_fg
    } else {
        theme.border_fg
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg));

    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = visible.len().saturating_sub(inner_height);
    if app.diff_scroll > max_scroll {
        app.diff_scroll = max_scroll;
    }

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Line::styled(
            "No visible files",
            Style::default().fg(theme.dim_fg),
        ))]
    } else {
        visible
            .iter()
            .skip(app.diff_scroll)
            .take(inner_height)
            .map(|&id| {
                let entry = app.entries.get(id);
                let badge = entry.change_type.badge();
                let mut spans = vec![
                    Span::styled(
                        format!("[{}] ", badge),
                        Style::default().fg(theme.badge_color(badge)),
                    ),
                    Span::raw(entry.full_path.clone()),
                ];
                if !entry.href.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", entry.href),
                        Style::default().fg(theme.dim_fg).add_modifier(Modifier::DIM),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
