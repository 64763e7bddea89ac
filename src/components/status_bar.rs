use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::theme::Theme;

/// Render the one-line status bar: transient message or key hints on the
/// left, visibility counts on the right.
pub fn render(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let left = if let Some((msg, _)) = &app.status_message {
        msg.clone()
    } else {
        hints(app.focus).to_string()
    };

    let right = format!(
        " {} hidden / {} files ",
        app.hidden_count(),
        app.entries.len()
    );

    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count());
    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(theme.accent_fg)),
    ]);

    let bar = Paragraph::new(line).style(
        Style::default()
            .bg(theme.status_bg)
            .fg(theme.status_fg),
    );
    frame.render_widget(bar, area);
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Tree => " space:toggle  h/l:fold  j/k:move  Tab:panel  ?:help  q:quit",
        Focus::Diff => " j/k:scroll  Tab:panel  ?:help  q:quit",
        Focus::IncludeField | Focus::ExcludeField => {
            " type to filter  Ctrl-s:save defaults  Esc:back  Tab:panel"
        }
    }
}
