pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use daygraph_core::SelectionController;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, Mode};

pub fn run(controller: SelectionController) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(controller)?;
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.mode() {
                    Mode::Browse => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.move_days(-1),
                        KeyCode::Right | KeyCode::Char('l') => app.move_days(1),
                        KeyCode::Up | KeyCode::Char('k') => app.move_days(-7),
                        KeyCode::Down | KeyCode::Char('j') => app.move_days(7),
                        KeyCode::PageUp | KeyCode::Char('p') => app.previous_month(),
                        KeyCode::PageDown | KeyCode::Char('n') => app.next_month(),
                        KeyCode::Char('t') => app.goto_today(),
                        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
                        _ => {}
                    },
                    Mode::Modal => match key.code {
                        KeyCode::Esc
                        | KeyCode::Enter
                        | KeyCode::Char('q')
                        | KeyCode::Char(' ') => app.close_modal(),
                        _ => {}
                    },
                }
            }
        }
    }
}
