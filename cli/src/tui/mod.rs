pub mod app;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tasksweep_core::TaskStore;

use crate::tui::app::{App, InputMode};

const INPUT_POLL: Duration = Duration::from_millis(250);

pub fn run(store: TaskStore, interval: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, interval);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Backend draw errors are not guaranteed Send + Sync, so flatten
        // them into an io::Error before `?`.
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        let now = Instant::now();
        if app.tick_due(now) {
            app.sweep_tick();
            continue;
        }

        // Wake up in time for the next sweep tick even with no input.
        let timeout = app
            .until_next_tick(now)
            .map_or(INPUT_POLL, |t| t.min(INPUT_POLL));

        if !event::poll(timeout)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Char(' ') | KeyCode::Enter => app.complete_selected(),
                    KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
                    KeyCode::Char('a') => app.enter_add_mode(),
                    KeyCode::Char('s') => app.start_sweep(),
                    KeyCode::Char('r') => app.refresh(),
                    _ => {}
                },
                InputMode::Adding => match key.code {
                    KeyCode::Enter => app.submit_add(),
                    KeyCode::Esc => app.exit_input_mode(),
                    KeyCode::Char(c) => app.input_char(c),
                    KeyCode::Backspace => app.delete_char(),
                    KeyCode::Left => app.move_cursor_left(),
                    KeyCode::Right => app.move_cursor_right(),
                    _ => {}
                },
                InputMode::ConfirmDelete(id) => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(id),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
                    _ => {}
                },
            }
        }
    }
}
