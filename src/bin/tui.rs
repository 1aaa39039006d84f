//! Roster TUI (Terminal User Interface)
//!
//! A terminal-based front end for the student roster.
//!
//! Usage: `roster-tui [settings.json]`

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use roster::storage::Settings;
use roster::tui::{App, Screen, ui::ui};
use std::io;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args().nth(1).unwrap_or_else(|| "roster.json".to_string());
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path))?;

    roster::init_logging(Some(Path::new(&settings.log_path)))
        .context("Failed to open log file")?;

    // Create app state before touching the terminal so setup errors print normally
    let mut app = App::new(settings).context("Failed to open roster storage")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Let in-flight writes land before exiting
    app.wait_for_background();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.current_screen {
                    Screen::StudentList => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => {
                                app.should_quit = true;
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                app.next();
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                app.previous();
                            }
                            KeyCode::Enter => {
                                app.open_selected_student();
                            }
                            KeyCode::Char('r') | KeyCode::F(5) => {
                                app.trigger_refresh();
                            }
                            _ => {}
                        }
                    }
                    Screen::StudentDetail => {
                        match key.code {
                            KeyCode::Esc => {
                                app.back_to_student_list();
                            }
                            KeyCode::Char(c) if !c.is_control() => {
                                if let Some(screen) = &mut app.detail_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.detail_screen {
                                    screen.backspace();
                                }
                            }
                            KeyCode::Delete => {
                                if let Some(screen) = &mut app.detail_screen {
                                    screen.clear();
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
