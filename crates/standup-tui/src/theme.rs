use ratatui::style::{Color, Modifier, Style};
use standup_domain::SprintStatus;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const STAT_SPRINT: Color = Color::Cyan;
pub const STAT_MEMBERS: Color = Color::Green;
pub const STAT_ENTRIES: Color = Color::Magenta;

pub const STATUS_ACTIVE: Color = Color::Green;
pub const STATUS_PLANNED: Color = Color::Yellow;
pub const STATUS_COMPLETED: Color = Color::Gray;

pub const MEMBER_INACTIVE: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
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

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn stat_value(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn sprint_status_style(status: SprintStatus) -> Style {
    let color = match status {
        SprintStatus::Active => STATUS_ACTIVE,
        SprintStatus::Planned => STATUS_PLANNED,
        SprintStatus::Completed => STATUS_COMPLETED,
    };
    Style::default().fg(color)
}

pub fn member_active_style(active: bool) -> Style {
    if active {
        Style::default().fg(STATUS_ACTIVE)
    } else {
        Style::default().fg(MEMBER_INACTIVE)
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
