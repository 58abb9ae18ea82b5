mod app;
mod config;
mod event;
mod exercise;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use app::{App, Screen};
use event::{AppEvent, EventHandler};
use ui::components::hud::Hud;
use ui::components::split_diagram::SplitDiagram;
use ui::layout::AppLayout;
use ui::num_input::NumInput;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(name = "splitr", version, about = "Terminal number splitting trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Message language (en, nl)")]
    language: Option<String>,

    #[arg(short, long, help = "Largest total to start from (2-500)")]
    max: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
            app.form.theme = theme;
        }
    }
    if let Some(language) = cli.language {
        app.config.language = language;
        app.config.normalize();
    }
    if let Some(max) = cli.max {
        app.form.max_input = NumInput::new(&max.to_string());
    }
    rust_i18n::set_locale(&app.config.language);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.tick(),
            AppEvent::Redraw => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Start => app.handle_form_key(key),
        Screen::Game => app.handle_answer_key(key),
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        Screen::Start => render_start(frame, app),
        Screen::Game => render_game(frame, app),
    }
}

fn render_start(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let form_area = ui::layout::centered_rect(50, 80, layout[0]);
    frame.render_widget(&app.form, form_area);

    let hints = [
        format!("[Tab] {}", t!("start.hint_move")),
        format!("[Space] {}", t!("start.hint_toggle")),
        format!("[Enter] {}", t!("start.hint_start")),
        format!("[Esc] {}", t!("start.hint_quit")),
    ];
    render_hints(frame, app, layout[1], &hints);
}

fn render_game(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let app_layout = AppLayout::new(area);

    if let Some(ref session) = app.session {
        let hud = Hud::new(session, app.reward_active(), app.theme);
        frame.render_widget(hud, app_layout.header);
    }

    if let Some(ref exercise) = app.exercise {
        let diagram = SplitDiagram::new(
            exercise,
            &app.answer,
            app.mark,
            app.input_enabled(),
            app.theme,
        );
        frame.render_widget(diagram, app_layout.main);
    }

    let hints = [
        format!("[Enter] {}", t!("game.hint_check")),
        format!("[Esc] {}", t!("game.hint_stop")),
    ];
    render_hints(frame, app, app_layout.footer, &hints);
}

fn render_hints(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, hints: &[String]) {
    let colors = &app.theme.colors;
    let refs: Vec<&str> = hints.iter().map(String::as_str).collect();
    let lines: Vec<Line> = ui::layout::pack_hint_lines(&refs, area.width as usize)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.hint()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
