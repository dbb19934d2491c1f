//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Message list styles
// =============================================================================

/// Bubble outline (blue, like the send button).
pub fn bubble_border_style() -> Style {
    Style::default().fg(Color::Blue)
}

/// Text inside a bubble.
pub fn bubble_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Placeholder avatar glyph (gray).
pub fn avatar_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Hint shown while the list is empty.
pub fn empty_list_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Input row styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn send_button_style(focused: bool) -> Style {
    let style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

// =============================================================================
// Panel styles
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
