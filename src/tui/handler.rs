//! Event handler for the TUI
//!
//! Routes key events to the wizard based on the current slide's state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;
use crate::wizard::SlidePhase;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Quit works even while a call is running
    if key.code == KeyCode::Esc {
        app.quit();
        return Ok(());
    }

    if app.is_frozen() {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys
    match key.code {
        KeyCode::Char('d') if ctrl => {
            app.dismiss();
            return Ok(());
        }
        KeyCode::Char('n') if ctrl => {
            app.add_more();
            return Ok(());
        }
        KeyCode::Char('p') if ctrl => {
            app.prev_slide();
            return Ok(());
        }
        KeyCode::Char('f') if ctrl => {
            app.next_slide();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.prev_slide();
            return Ok(());
        }
        KeyCode::PageDown => {
            app.next_slide();
            return Ok(());
        }
        KeyCode::F(n) if (1..=9).contains(&n) => {
            app.click_dot(usize::from(n - 1));
            return Ok(());
        }
        _ => {}
    }

    match app.dialog.sequence().current().phase() {
        SlidePhase::Done => handle_done_key(app, key),
        SlidePhase::Active => handle_form_key(app, key),
        SlidePhase::Unopened => Ok(()),
    }
}

/// Keys in a slide's done state pick a follow-up action
fn handle_done_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        let index = c as usize - '1' as usize;
        app.choose_done_action(index)?;
    }
    Ok(())
}

/// Keys while a slide shows its form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.submit();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.dialog.sequence_mut().current_mut().form_mut() {
                form.focus_next();
            }
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.dialog.sequence_mut().current_mut().form_mut() {
                form.focus_prev();
            }
            return Ok(());
        }
        _ => {}
    }

    let Some(field) = app
        .dialog
        .sequence_mut()
        .current_mut()
        .form_mut()
        .and_then(|form| form.focused_mut())
    else {
        return Ok(());
    };

    if field.is_text() {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.input.insert(c),
            KeyCode::Backspace => field.input.backspace(),
            KeyCode::Delete => field.input.delete(),
            KeyCode::Left => field.input.move_left(),
            KeyCode::Right => field.input.move_right(),
            KeyCode::Home => field.input.move_start(),
            KeyCode::End => field.input.move_end(),
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => field.cycle(true),
            KeyCode::Left => field.cycle(false),
            KeyCode::Backspace | KeyCode::Delete => field.input.clear(),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;
    use crate::tui::app::WizardExit;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = test_app(1);
        type_text(&mut app, "Widgett");
        press(&mut app, KeyCode::Backspace);

        let slide = app.dialog.sequence().current();
        assert_eq!(slide.form().unwrap().value("item"), Some("Widget"));
        assert!(slide.primary_enabled());
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = test_app(3);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.dialog.sequence().current_index(), 1);

        ctrl(&mut app, 'f');
        assert_eq!(app.dialog.sequence().current_index(), 2);

        ctrl(&mut app, 'p');
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.dialog.sequence().current_index(), 0);

        press(&mut app, KeyCode::F(3));
        assert_eq!(app.dialog.sequence().current_index(), 2);
    }

    #[test]
    fn test_enter_submits_and_digits_route() {
        let mut app = test_app(1);
        type_text(&mut app, "Widget");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_frozen());

        // only quit gets through while frozen
        press(&mut app, KeyCode::PageDown);
        app.finish_pending();
        assert!(app.dialog.sequence().current().is_done());

        press(&mut app, KeyCode::Char('2'));
        assert!(app.should_quit);
        assert!(matches!(app.exit(), WizardExit::Route(_)));
    }

    #[test]
    fn test_ctrl_d_locked_then_dismisses() {
        let mut app = test_app(1);
        ctrl(&mut app, 'd');
        assert!(!app.should_quit);
        assert!(app.status_message.is_some());

        type_text(&mut app, "Widget");
        press(&mut app, KeyCode::Enter);
        app.finish_pending();
        ctrl(&mut app, 'd');
        assert_eq!(app.exit(), &WizardExit::Dismissed);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = test_app(1);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        assert_eq!(app.exit(), &WizardExit::Quit);
    }
}
