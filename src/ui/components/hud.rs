use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::session::state::{SessionState, STREAK_TARGET};
use crate::ui::theme::Theme;

/// Header row during play: score and max labels, the streak dots, and the
/// reward banner while the reward pause runs.
pub struct Hud<'a> {
    session: &'a SessionState,
    reward_active: bool,
    theme: &'a Theme,
}

impl<'a> Hud<'a> {
    pub fn new(session: &'a SessionState, reward_active: bool, theme: &'a Theme) -> Self {
        Self {
            session,
            reward_active,
            theme,
        }
    }
}

impl Widget for Hud<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let on_header = |fg| Style::default().fg(fg).bg(colors.header_bg());

        let mut spans = vec![
            Span::styled(
                " splitr ",
                on_header(colors.header_fg()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", self.session.score_label()), on_header(colors.fg())),
            Span::styled(format!("   {}", self.session.max_label()), on_header(colors.fg())),
            Span::styled("   ", on_header(colors.fg())),
        ];

        for i in 0..STREAK_TARGET {
            if i < self.session.streak {
                spans.push(Span::styled("● ", on_header(colors.dot_filled())));
            } else {
                spans.push(Span::styled("○ ", on_header(colors.dot_empty())));
            }
        }

        if self.reward_active {
            spans.push(Span::styled(
                format!("  ★ {} ★", t!("game.reward")),
                on_header(colors.reward()).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()))
            .render(area, buf);
    }
}
