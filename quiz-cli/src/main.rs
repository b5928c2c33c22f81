//! Quiz CLI - terminal quiz runner

mod app;
mod io;
mod ui;

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::QuizApp;
use quiz_core::Phase;

fn main() -> Result<()> {
    // Get file path from args
    let args: Vec<String> = std::env::args().collect();
    let file_path = args.get(1);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = QuizApp::new();

    // Load quiz if provided
    if let Some(path) = file_path {
        match io::load_quiz(path) {
            Ok(document) => {
                let title = document.title.clone();
                app.load_quiz(document);
                app.set_status(&format!("Loaded {}", title));
            }
            Err(e) => {
                app.set_status(&format!("Error: {:#}", e));
            }
        }
    } else {
        app.set_status("No quiz loaded. Pass a quiz JSON file as argument.");
    }

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut QuizApp) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Clear status on any key
            app.clear_status();

            match app.phase() {
                Some(Phase::Taking) => handle_taking(app, key.code),
                Some(Phase::Reviewing) => handle_reviewing(app, key.code),
                None => {
                    if key.code == KeyCode::Char('q') {
                        app.running = false;
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_taking(app: &mut QuizApp, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.running = false,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.next_option(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_option(),
        KeyCode::Char('l') | KeyCode::Right => app.next_question(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_question(),

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => app.select_current(),

        // Submission
        KeyCode::Char('s') => app.submit(),

        _ => {}
    }
}

fn handle_reviewing(app: &mut QuizApp, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.running = false,

        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
            app.next_question()
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
            app.prev_question()
        }

        KeyCode::Char('r') => app.reset(),

        KeyCode::Char('e') => {
            if let Some(session) = app.session.as_ref() {
                match io::export_report(session) {
                    Ok(path) => app.set_status(&format!("Exported to {}", path.display())),
                    Err(e) => app.set_status(&format!("Export failed: {:#}", e)),
                }
            }
        }

        _ => {}
    }
}
