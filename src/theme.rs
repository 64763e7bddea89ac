//! Color palette for the UI. One built-in dark scheme.

use ratatui::style::Color;

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub tree_dir_fg: Color,
    pub tree_file_fg: Color,
    pub tree_hidden_fg: Color,
    pub tree_selected_bg: Color,
    pub tree_selected_fg: Color,

    pub badge_added_fg: Color,
    pub badge_deleted_fg: Color,
    pub badge_renamed_fg: Color,
    pub badge_modified_fg: Color,

    pub border_fg: Color,
    pub border_focused_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dim_fg: Color,
    pub accent_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tree_dir_fg: Color::Blue,
            tree_file_fg: Color::White,
            tree_hidden_fg: Color::DarkGray,
            tree_selected_bg: Color::Rgb(50, 60, 80),
            tree_selected_fg: Color::White,

            badge_added_fg: Color::Green,
            badge_deleted_fg: Color::Red,
            badge_renamed_fg: Color::Cyan,
            badge_modified_fg: Color::Yellow,

            border_fg: Color::DarkGray,
            border_focused_fg: Color::Cyan,
            status_bg: Color::Rgb(30, 34, 44),
            status_fg: Color::Gray,
            dim_fg: Color::DarkGray,
            accent_fg: Color::Cyan,
        }
    }
}

impl Theme {
    /// Badge color for a change-type letter.
    pub fn badge_color(&self, badge: char) -> Color {
        match badge {
            'A' => self.badge_added_fg,
            'D' => self.badge_deleted_fg,
            'R' => self.badge_renamed_fg,
            _ => self.badge_modified_fg,
        }
    }
}
