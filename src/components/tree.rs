use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::model::entry::EntrySet;
use crate::model::selection::{SelectionState, TriState};
use crate::model::tree::{RowKind, TreeRow, TreeViewState};
use crate::theme::Theme;

/// Tree widget that renders the file tree with box-drawing characters,
/// tri-state checkboxes, and disclosure arrows.
pub struct TreeWidget<'a> {
    view: &'a TreeViewState,
    entries: &'a EntrySet,
    selection: &'a SelectionState,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> TreeWidget<'a> {
    pub fn new(
        view: &'a TreeViewState,
        entries: &'a EntrySet,
        selection: &'a SelectionState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            entries,
            selection,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block.into();
        self
    }

    /// Build the prefix string for tree indentation using box-drawing characters.
    ///
    /// The ancestor chain decides where continuation lines are drawn.
    fn build_prefix(row: &TreeRow, rows: &[TreeRow], row_index: usize) -> String {
        if row.depth == 0 {
            return String::new();
        }

        let mut parts: Vec<&str> = Vec::new();

        // For each ancestor level (1..depth), check whether the ancestor at
        // that level is the last sibling there, walking backwards.
        for d in 1..row.depth {
            let mut ancestor_is_last = false;
            for j in (0..row_index).rev() {
                if rows[j].depth == d {
                    ancestor_is_last = rows[j].is_last_sibling;
                    break;
                }
                if rows[j].depth < d {
                    break;
                }
            }
            if ancestor_is_last {
                parts.push("   ");
            } else {
                parts.push("│  ");
            }
        }

        if row.is_last_sibling {
            parts.push("└──");
        } else {
            parts.push("├──");
        }

        parts.join("")
    }

    fn checkbox(state: TriState) -> &'static str {
        match state {
            TriState::Checked => "[x] ",
            TriState::Unchecked => "[ ] ",
            TriState::Indeterminate => "[~] ",
        }
    }
}

impl<'a> Widget for TreeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let rows = &self.view.rows;
        let selected = self.view.selected_index;
        let visible_height = inner_area.height as usize;

        if rows.is_empty() || visible_height == 0 {
            return;
        }

        let scroll = self.view.scroll_offset;
        let visible_rows = rows.iter().enumerate().skip(scroll).take(visible_height);

        for (i, (idx, row)) in visible_rows.enumerate() {
            let y = inner_area.y + i as u16;
            let prefix = Self::build_prefix(row, rows, idx);
            let is_selected = idx == selected;

            let mut spans: Vec<Span> = vec![Span::raw(prefix)];
            match row.kind {
                RowKind::Dir { expanded } => {
                    spans.push(Span::raw(if expanded { "▾ " } else { "▸ " }));
                    spans.push(Span::raw(Self::checkbox(self.selection.dir_state(&row.path))));
                    spans.push(Span::styled(
                        format!("{}/", row.label),
                        Style::default()
                            .fg(self.theme.tree_dir_fg)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                RowKind::File { entry } => {
                    let file = self.entries.get(entry);
                    let hidden = self.entries.is_hidden(entry);
                    spans.push(Span::raw("  "));
                    spans.push(Span::raw(Self::checkbox(self.selection.file_state(entry))));
                    let badge = file.change_type.badge();
                    spans.push(Span::styled(
                        format!("[{}] ", badge),
                        Style::default().fg(self.theme.badge_color(badge)),
                    ));
                    let fg = if hidden {
                        self.theme.tree_hidden_fg
                    } else {
                        self.theme.tree_file_fg
                    };
                    spans.push(Span::styled(row.label.clone(), Style::default().fg(fg)));
                }
            }

            let mut line = Line::from(spans);
            if is_selected {
                line = line.style(
                    Style::default()
                        .bg(self.theme.tree_selected_bg)
                        .fg(self.theme.tree_selected_fg)
                        .add_modifier(Modifier::BOLD),
                );
            }
            buf.set_line(inner_area.x, y, &line, inner_area.width);
        }
    }
}
