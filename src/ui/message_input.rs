//! Input row rendering: the text field and the Send button.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::{chat_screen_state::FocusTarget, message_input_state::MessageInputState};

use super::styles;

/// Shown while the buffer is empty.
pub const PLACEHOLDER_TEXT: &str = "Please enter a message...";

pub const SEND_BUTTON_LABEL: &str = "Send";

const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input_state: &MessageInputState,
    focus: FocusTarget,
) {
    let is_focused = focus == FocusTarget::Input;
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let text_width = usize::from(area.width.saturating_sub(2))
        .saturating_sub(PROMPT_SYMBOL.len());
    let (visible, cursor_column) =
        visible_window(input_state.text(), input_state.cursor_position(), text_width);

    let paragraph = Paragraph::new(build_input_line(&visible)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(cursor_column.min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

pub fn render_send_button(frame: &mut Frame<'_>, area: Rect, focus: FocusTarget) {
    let is_focused = focus == FocusTarget::SendButton;
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let button = Paragraph::new(Line::from(Span::styled(
        SEND_BUTTON_LABEL,
        styles::send_button_style(is_focused),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(button, area);
}

fn build_input_line(visible_text: &str) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if visible_text.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(visible_text.to_owned(), styles::input_text_style()),
        ])
    }
}

/// Slice of `text` that fits in `width` cells with the cursor on screen.
///
/// Returns the visible text and the cursor's column inside it.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |ch: &char| ch.width().unwrap_or(0);

    // Leave one cell for the cursor itself when it sits past the last char.
    let budget = width.saturating_sub(1);
    let mut start = 0;
    let mut before_cursor: usize = chars[..cursor].iter().map(char_width).sum();
    while before_cursor > budget && start < cursor {
        before_cursor -= char_width(&chars[start]);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for ch in &chars[start..] {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        visible.push(*ch);
        used += w;
    }

    (visible, before_cursor)
}
