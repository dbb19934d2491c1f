//! Message row rendering.
//!
//! Each message becomes a right-aligned bordered bubble:
//!
//! ```text
//! ╭───────╮
//! │ hello │ ◉
//! ╰───────╯
//! ```
//!
//! The avatar column is optional. Text wraps at word boundaries; words wider
//! than the bubble are broken by character.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{chat_screen_state::ChatScreenOptions, message_store::RowSource};

use super::styles;

/// Placeholder avatar drawn next to every bubble.
pub const AVATAR_GLYPH: &str = "◉";

/// Border and inner padding on both sides of the bubble text.
const BUBBLE_CHROME_WIDTH: usize = 4;

/// Gap, glyph, gap.
const AVATAR_COLUMN_WIDTH: usize = 3;

/// Builds one list item per row of `source`.
pub fn build_message_list_items(
    source: &impl RowSource,
    list_width: usize,
    options: ChatScreenOptions,
) -> Vec<ListItem<'static>> {
    let text_width = bubble_text_width(list_width, options);

    (0..source.row_count())
        .filter_map(|index| source.row_at(index))
        .map(|message| {
            ListItem::new(bubble_lines(
                message.text(),
                text_width,
                options.show_avatars,
            ))
        })
        .collect()
}

/// Widest text a bubble may hold in a list `list_width` cells wide.
pub fn bubble_text_width(list_width: usize, options: ChatScreenOptions) -> usize {
    let row_width = list_width * usize::from(options.bubble_width_percent) / 100;
    let chrome = BUBBLE_CHROME_WIDTH
        + if options.show_avatars {
            AVATAR_COLUMN_WIDTH
        } else {
            0
        };

    row_width.saturating_sub(chrome).max(1)
}

/// Lines of a single bubble row, every line the same display width.
pub fn bubble_lines(text: &str, text_width: usize, show_avatar: bool) -> Vec<Line<'static>> {
    let wrapped = wrap_text(text, text_width);
    let inner_width = wrapped.iter().map(|line| line.width()).max().unwrap_or(0);
    let border = styles::bubble_border_style();
    let horizontal = "─".repeat(inner_width + 2);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(vec![Span::styled(format!("╭{horizontal}╮"), border)]);

    for text_line in &wrapped {
        let padding = " ".repeat(inner_width - text_line.width());
        lines.push(vec![
            Span::styled("│ ", border),
            Span::styled(format!("{text_line}{padding}"), styles::bubble_text_style()),
            Span::styled(" │", border),
        ]);
    }

    lines.push(vec![Span::styled(format!("╰{horizontal}╯"), border)]);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, mut spans)| {
            if show_avatar {
                // Avatar sits beside the first line of text, like a top-aligned icon.
                spans.push(if index == 1 {
                    Span::styled(format!(" {AVATAR_GLYPH} "), styles::avatar_style())
                } else {
                    Span::raw(" ".repeat(AVATAR_COLUMN_WIDTH))
                });
            }
            Line::from(spans).alignment(Alignment::Right)
        })
        .collect()
}

/// Greedy word wrap by display width.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
