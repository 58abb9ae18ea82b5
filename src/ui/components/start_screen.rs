use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::config::Config;
use crate::ui::num_input::NumInput;
use crate::ui::theme::Theme;

const FIELD_COUNT: usize = 4;

/// Start-screen form state: the two numeric fields, the two toggles, the
/// focus position, and the last validation error.
pub struct StartForm {
    pub max_input: NumInput,
    pub score_input: NumInput,
    pub allow_top: bool,
    pub three_way: bool,
    /// 0 = max total, 1 = starting score, 2 = allow-top, 3 = three-way.
    pub focus: usize,
    pub error: Option<String>,
    pub theme: &'static Theme,
}

impl StartForm {
    pub fn new(theme: &'static Theme, config: &Config) -> Self {
        Self {
            max_input: NumInput::new(&config.max_total.to_string()),
            score_input: NumInput::new("0"),
            allow_top: config.allow_top_missing,
            three_way: config.three_way_split,
            focus: 0,
            error: None,
            theme,
        }
    }

    pub fn next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn prev(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        } else {
            self.focus = FIELD_COUNT - 1;
        }
    }

    /// Flip the focused checkbox; no-op when a numeric field is focused.
    pub fn toggle(&mut self) {
        match self.focus {
            2 => self.allow_top = !self.allow_top,
            3 => self.three_way = !self.three_way,
            _ => {}
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut NumInput> {
        match self.focus {
            0 => Some(&mut self.max_input),
            1 => Some(&mut self.score_input),
            _ => None,
        }
    }

    fn input_line(&self, label: &str, input: &NumInput, focused: bool) -> Line<'_> {
        let colors = &self.theme.colors;
        let indicator = if focused { " > " } else { "   " };

        let label_style = Style::default()
            .fg(if focused { colors.accent() } else { colors.fg() })
            .add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let mut spans = vec![
            Span::styled(format!("{indicator}{label}: "), label_style),
            Span::styled("[", Style::default().fg(colors.border())),
        ];

        let (before, at_cursor, after) = input.render_parts();
        let text_style = Style::default().fg(colors.fg());
        spans.push(Span::styled(before.to_string(), text_style));
        if focused {
            let cursor_style = Style::default()
                .fg(colors.cursor_fg())
                .bg(colors.cursor_bg());
            match at_cursor {
                Some(ch) => {
                    spans.push(Span::styled(ch.to_string(), cursor_style));
                    spans.push(Span::styled(after.to_string(), text_style));
                }
                None => spans.push(Span::styled(" ", cursor_style)),
            }
        } else if let Some(ch) = at_cursor {
            spans.push(Span::styled(ch.to_string(), text_style));
            spans.push(Span::styled(after.to_string(), text_style));
        }

        spans.push(Span::styled("]", Style::default().fg(colors.border())));
        Line::from(spans)
    }

    fn checkbox_line(&self, label: &str, checked: bool, focused: bool) -> Line<'_> {
        let colors = &self.theme.colors;
        let indicator = if focused { " > " } else { "   " };
        let glyph = if checked { "[x]" } else { "[ ]" };

        let style = Style::default()
            .fg(if focused { colors.accent() } else { colors.fg() })
            .add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        Line::from(Span::styled(format!("{indicator}{glyph} {label}"), style))
    }
}

impl Widget for &StartForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(8),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "splitr",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t!("start.subtitle").into_owned(),
                Style::default().fg(colors.fg()),
            )),
        ];
        let title = Paragraph::new(title_lines).alignment(Alignment::Center);
        title.render(layout[0], buf);

        let field_lines = vec![
            self.input_line(&t!("start.max_label"), &self.max_input, self.focus == 0),
            Line::from(""),
            self.input_line(&t!("start.score_label"), &self.score_input, self.focus == 1),
            Line::from(""),
            self.checkbox_line(&t!("start.allow_top_label"), self.allow_top, self.focus == 2),
            Line::from(""),
            self.checkbox_line(&t!("start.three_way_label"), self.three_way, self.focus == 3),
        ];
        Paragraph::new(field_lines).render(layout[1], buf);

        if let Some(ref message) = self.error {
            let error_line = Line::from(Span::styled(
                format!("   {message}"),
                Style::default().fg(colors.error()),
            ));
            Paragraph::new(error_line).render(layout[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> StartForm {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        StartForm::new(theme, &Config::default())
    }

    #[test]
    fn prefilled_from_config_defaults() {
        let form = form();
        assert_eq!(form.max_input.value(), "10");
        assert_eq!(form.score_input.value(), "0");
        assert!(!form.allow_top);
        assert!(!form.three_way);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = form();
        form.prev();
        assert_eq!(form.focus, FIELD_COUNT - 1);
        form.next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn toggle_only_affects_checkboxes() {
        let mut form = form();
        form.toggle();
        assert!(!form.allow_top && !form.three_way);

        form.focus = 2;
        form.toggle();
        assert!(form.allow_top);

        form.focus = 3;
        form.toggle();
        assert!(form.three_way);
    }

    #[test]
    fn focused_input_follows_focus() {
        let mut form = form();
        assert!(form.focused_input().is_some());
        form.focus = 2;
        assert!(form.focused_input().is_none());
    }
}
