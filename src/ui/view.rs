use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::chat_screen_state::{ChatScreenState, FocusTarget, HitArea};

use super::message_input::{render_message_input, render_send_button};
use super::message_rendering::build_message_list_items;
use super::styles;

/// Input field plus its two border rows.
const INPUT_ROW_HEIGHT: u16 = 3;

const SEND_BUTTON_WIDTH: u16 = 10;

const EMPTY_LIST_HINT: &str = "No messages yet. Type below and press Send.";

pub fn render(frame: &mut Frame<'_>, state: &mut ChatScreenState) {
    let [messages_area, input_row_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(INPUT_ROW_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [input_area, send_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .areas(input_row_area);

    render_messages_panel(frame, messages_area, state);
    render_message_input(frame, input_area, state.input(), state.focus());
    render_send_button(frame, send_area, state.focus());
    state.set_send_button_area(hit_area(send_area));

    let status = Paragraph::new(status_line(state)).style(styles::status_bar_style());
    frame.render_widget(status, status_area);
}

fn render_messages_panel(frame: &mut Frame<'_>, area: Rect, state: &mut ChatScreenState) {
    let block = Block::default()
        .title(format!("Messages ({})", state.store().count()))
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if state.store().is_empty() {
        let hint = Paragraph::new(EMPTY_LIST_HINT)
            .style(styles::empty_list_hint_style())
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner_height = usize::from(block.inner(area).height);
    let inner_width = usize::from(area.width.saturating_sub(2));
    let items = build_message_list_items(state.store(), inner_width, state.options());
    let heights: Vec<usize> = items.iter().map(ListItem::height).collect();
    let list = List::new(items).block(block);

    // The pinned row is passed as the selection so ratatui scrolls it into view.
    // No highlight style is set, so the selection itself is not drawn.
    let mut list_state = ListState::default()
        .with_offset(state.message_list().scroll_offset())
        .with_selected(state.message_list().visible_index());
    frame.render_stateful_widget(list, area, &mut list_state);

    let offset = list_state.offset();
    let drawn = rows_fitting(heights.get(offset..).unwrap_or_default(), inner_height);
    state.message_list_mut().set_viewport(offset, drawn);
}

/// Number of leading rows whose heights fit in `height` lines.
fn rows_fitting(heights: &[usize], height: usize) -> usize {
    let mut used = 0;
    heights
        .iter()
        .take_while(|row_height| {
            used += **row_height;
            used <= height
        })
        .count()
}

fn hit_area(area: Rect) -> HitArea {
    HitArea {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height,
    }
}

fn status_line(state: &ChatScreenState) -> String {
    let count = state.store().count();
    let focus_hint = match state.focus() {
        FocusTarget::Input if state.options().submit_on_enter => "Enter/Ctrl+S: send",
        FocusTarget::Input => "Ctrl+S: send",
        FocusTarget::SendButton => "Enter/Space: send",
    };
    format!(
        "messages: {count} | {focus_hint} | Tab: focus | Up/Down/PgUp/PgDn: scroll | Esc: quit"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::chat_screen_state::ChatScreenOptions,
        ui::{message_input::PLACEHOLDER_TEXT, message_rendering::AVATAR_GLYPH},
        usecases::send_message::{send_message, SendTrigger},
    };
    use ratatui::{backend::TestBackend, Terminal};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 20;

    fn send(state: &mut ChatScreenState, text: &str) {
        for ch in text.chars() {
            state.input_mut().insert_char(ch);
        }
        send_message(state, SendTrigger::Button);
    }

    fn draw(state: &mut ChatScreenState, height: u16) -> Vec<String> {
        let backend = TestBackend::new(WIDTH, height);
        let mut terminal = Terminal::new(backend).expect("TestBackend terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("frame should draw");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn empty_screen_shows_placeholder_send_button_and_hint() {
        let mut state = ChatScreenState::default();

        let rows = draw(&mut state, HEIGHT);

        assert!(screen_contains(&rows, PLACEHOLDER_TEXT));
        assert!(screen_contains(&rows, "Send"));
        assert!(screen_contains(&rows, "No messages yet"));
    }

    #[test]
    fn records_send_button_area_in_bottom_right() {
        let mut state = ChatScreenState::default();

        draw(&mut state, HEIGHT);

        let area = state.send_button_area().expect("button area must be recorded");
        assert_eq!(area.width, SEND_BUTTON_WIDTH);
        assert_eq!(area.height, INPUT_ROW_HEIGHT);
        assert_eq!(area.x + area.width, WIDTH);
        assert_eq!(area.y + area.height, HEIGHT - 1);
    }

    #[test]
    fn sent_message_is_drawn_in_a_right_aligned_bubble() {
        let mut state = ChatScreenState::default();
        send(&mut state, "hello");

        let rows = draw(&mut state, HEIGHT);

        let text_row = rows
            .iter()
            .find(|row| row.contains("│ hello │"))
            .expect("bubble row must be drawn");
        assert!(text_row.contains(AVATAR_GLYPH));
        // Bubble hugs the right border of the panel.
        assert!(text_row.trim_end().ends_with(&format!("{AVATAR_GLYPH} │")));
        assert!(screen_contains(&rows, "Messages (1)"));
    }

    #[test]
    fn avatars_are_omitted_when_disabled() {
        let mut state = ChatScreenState::new(ChatScreenOptions {
            show_avatars: false,
            ..ChatScreenOptions::default()
        });
        send(&mut state, "hello");

        let rows = draw(&mut state, HEIGHT);

        assert!(screen_contains(&rows, "│ hello │"));
        assert!(!screen_contains(&rows, AVATAR_GLYPH));
    }

    #[test]
    fn newest_message_stays_visible_after_many_sends() {
        let mut state = ChatScreenState::default();
        for i in 0..30 {
            send(&mut state, &format!("message number {i}"));
        }

        let rows = draw(&mut state, HEIGHT);

        assert!(screen_contains(&rows, "message number 29"));
        assert!(!screen_contains(&rows, "message number 0 "));
        assert!(state.message_list().scroll_offset() > 0);
        assert_eq!(state.message_list().visible_index(), Some(29));
    }

    #[test]
    fn scrolling_to_top_shows_first_message() {
        let mut state = ChatScreenState::default();
        for i in 0..30 {
            send(&mut state, &format!("message number {i}"));
        }
        draw(&mut state, HEIGHT);

        state.message_list_mut().scroll_to_top(30);
        let rows = draw(&mut state, HEIGHT);

        assert!(screen_contains(&rows, "message number 0 "));
        assert_eq!(state.message_list().scroll_offset(), 0);
    }

    #[test]
    fn single_row_scroll_moves_the_drawn_window() {
        let mut state = ChatScreenState::default();
        for i in 0..30 {
            send(&mut state, &format!("message number {i}"));
        }
        draw(&mut state, HEIGHT);
        let bottom = state.message_list().scroll_offset();

        let mut offsets = Vec::new();
        for _ in 0..3 {
            state.message_list_mut().scroll_up(1, 30);
            draw(&mut state, HEIGHT);
            offsets.push(state.message_list().scroll_offset());
        }
        assert_eq!(offsets, [bottom - 1, bottom - 2, bottom - 3]);

        state.message_list_mut().scroll_down(1, 30);
        let rows = draw(&mut state, HEIGHT);
        assert_eq!(state.message_list().scroll_offset(), bottom - 2);
        assert!(screen_contains(&rows, &format!("message number {} ", bottom - 2)));
    }

    #[test]
    fn rows_fitting_counts_only_whole_rows() {
        assert_eq!(rows_fitting(&[3, 3, 3], 8), 2);
        assert_eq!(rows_fitting(&[3, 3], 6), 2);
        assert_eq!(rows_fitting(&[5], 4), 0);
        assert_eq!(rows_fitting(&[], 4), 0);
    }

    #[test]
    fn status_line_reflects_enter_submit_option() {
        let state = ChatScreenState::default();
        let manual = ChatScreenState::new(ChatScreenOptions {
            submit_on_enter: false,
            ..ChatScreenOptions::default()
        });

        assert!(status_line(&state).contains("Enter/Ctrl+S: send"));
        assert!(status_line(&manual).contains("| Ctrl+S: send"));
    }

    #[test]
    fn status_line_counts_messages() {
        let mut state = ChatScreenState::default();
        send(&mut state, "a");
        send(&mut state, "b");

        assert!(status_line(&state).starts_with("messages: 2"));
    }
}
