pub mod app;
pub mod event;
pub mod render;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self as term_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

use app::App;

/// Takes over the terminal, runs the screen until the user quits, then
/// restores the terminal even if the loop failed.
pub fn run(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: App) -> Result<()> {
    run_with_events(terminal, app, term_event::read)
}

/// Draw/dispatch loop over any event source. Errors from drawing or from
/// the source end the loop and are returned to the caller.
pub fn run_with_events<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| render::draw(f, &app))?;

        if let Event::Key(key) = next_event()? {
            if event::handle_key_event(&mut app, key) {
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 40)).unwrap()
    }

    fn app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn quit_key_ends_the_loop_cleanly() {
        let mut keys = vec![
            Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
        ];
        let result = run_with_events(&mut terminal(), app(), || Ok(keys.pop().unwrap()));
        assert!(result.is_ok());
    }

    #[test]
    fn event_source_failure_is_returned() {
        let result = run_with_events(&mut terminal(), app(), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
    }
}
