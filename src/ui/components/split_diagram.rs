use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::app::Mark;
use crate::exercise::{Exercise, Slot};
use crate::ui::num_input::NumInput;
use crate::ui::theme::Theme;

/// Number-bond diagram: the total on top, branch lines down to two or three
/// part boxes. The hidden slot renders the answer input in place.
pub struct SplitDiagram<'a> {
    exercise: &'a Exercise,
    input: &'a NumInput,
    mark: Option<Mark>,
    input_enabled: bool,
    theme: &'a Theme,
}

const BOX_W: u16 = 8;
const CONTENT_W: u16 = BOX_W - 2;
const DIAGRAM_H: u16 = 8;

impl<'a> SplitDiagram<'a> {
    pub fn new(
        exercise: &'a Exercise,
        input: &'a NumInput,
        mark: Option<Mark>,
        input_enabled: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            exercise,
            input,
            mark,
            input_enabled,
            theme,
        }
    }

    fn draw_box(&self, buf: &mut Buffer, x: u16, y: u16, style: Style) {
        buf.set_string(x, y, "┌──────┐", style);
        buf.set_string(x, y + 1, "│      │", style);
        buf.set_string(x, y + 2, "└──────┘", style);
    }

    fn draw_number(&self, buf: &mut Buffer, x: u16, y: u16, value: u32) {
        let colors = &self.theme.colors;
        self.draw_box(buf, x, y, Style::default().fg(colors.border()));

        let text = value.to_string();
        let len = text.chars().count().min(CONTENT_W as usize) as u16;
        let cx = x + 1 + (CONTENT_W - len) / 2;
        buf.set_string(
            cx,
            y + 1,
            &text,
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        );
    }

    fn draw_input(&self, buf: &mut Buffer, x: u16, y: u16) {
        let colors = &self.theme.colors;

        let (border_style, text_style) = match self.mark {
            Some(Mark::Good) => (
                Style::default().fg(colors.good()),
                Style::default().fg(colors.good()).bg(colors.good_bg()),
            ),
            Some(Mark::Bad) => (
                Style::default().fg(colors.bad()),
                Style::default().fg(colors.bad()).bg(colors.bad_bg()),
            ),
            None => (
                Style::default().fg(colors.border_focused()),
                Style::default().fg(colors.fg()),
            ),
        };

        self.draw_box(buf, x, y, border_style);

        if let Some(mark) = self.mark {
            let fill = match mark {
                Mark::Good => colors.good_bg(),
                Mark::Bad => colors.bad_bg(),
            };
            for cx in x + 1..x + 1 + CONTENT_W {
                buf[(cx, y + 1)].set_style(Style::default().bg(fill));
            }
        }

        // Cursor shown only while the input accepts keys.
        let show_cursor = self.input_enabled && self.mark.is_none();
        let (before, at_cursor, after) = self.input.render_parts();
        let text_len = self.input.value().chars().count() as u16;
        let visible = text_len + u16::from(show_cursor && at_cursor.is_none());
        let visible = visible.min(CONTENT_W);
        let mut cx = x + 1 + (CONTENT_W - visible) / 2;

        buf.set_string(cx, y + 1, before, text_style);
        cx += before.chars().count() as u16;

        let cursor_style = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());
        match at_cursor {
            Some(ch) => {
                let style = if show_cursor { cursor_style } else { text_style };
                buf.set_string(cx, y + 1, ch.to_string(), style);
                cx += 1;
                buf.set_string(cx, y + 1, after, text_style);
            }
            None if show_cursor => {
                buf.set_string(cx, y + 1, " ", cursor_style);
            }
            None => {}
        }
    }

    fn draw_slot(&self, buf: &mut Buffer, x: u16, y: u16, slot: Slot) {
        match self.exercise.shown(slot) {
            Some(value) => self.draw_number(buf, x, y, value),
            None => self.draw_input(buf, x, y),
        }
    }
}

impl Widget for SplitDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 32 || inner.height < DIAGRAM_H {
            return;
        }

        let tx = inner.x + (inner.width - BOX_W) / 2;
        let y0 = inner.y + (inner.height - DIAGRAM_H) / 2;
        let parts_y = y0 + 5;
        let line_style = Style::default().fg(colors.fg());

        self.draw_slot(buf, tx, y0, Slot::Top);

        if self.exercise.is_three_way() {
            buf.set_string(tx + 1, y0 + 3, "/", line_style);
            buf.set_string(tx + 4, y0 + 3, "│", line_style);
            buf.set_string(tx + 6, y0 + 3, "\\", line_style);
            buf.set_string(tx - 3, y0 + 4, "/", line_style);
            buf.set_string(tx + 4, y0 + 4, "│", line_style);
            buf.set_string(tx + 10, y0 + 4, "\\", line_style);

            self.draw_slot(buf, tx - 11, parts_y, Slot::Left);
            self.draw_slot(buf, tx, parts_y, Slot::Mid);
            self.draw_slot(buf, tx + 11, parts_y, Slot::Right);
        } else {
            buf.set_string(tx + 1, y0 + 3, "/", line_style);
            buf.set_string(tx + 6, y0 + 3, "\\", line_style);
            buf.set_string(tx - 2, y0 + 4, "/", line_style);
            buf.set_string(tx + 9, y0 + 4, "\\", line_style);

            self.draw_slot(buf, tx - 7, parts_y, Slot::Left);
            self.draw_slot(buf, tx + 7, parts_y, Slot::Right);
        }
    }
}
