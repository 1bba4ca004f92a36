//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, with a panic hook that restores
//! it on crash, and runs the wizard's event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use super::app::{App, WizardExit};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the wizard until it is quit, dismissed or routed away from
pub fn run_wizard(mut app: App, tick_rate: Duration) -> Result<WizardExit> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, tick_rate);
    let restored = restore_terminal();
    let exit = finish_wizard(&mut app, result)?;
    restored?;
    Ok(exit)
}

/// Apply the call still running when the loop ended, then report the loop's result
fn finish_wizard(app: &mut App, result: Result<()>) -> Result<WizardExit> {
    // records being written when the loop ended still land on disk
    app.finish_pending();
    result?;
    Ok(app.exit().clone())
}

fn event_loop(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
