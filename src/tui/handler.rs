//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! screen, dialog and wizard step.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, ConfirmAction, Screen};
use super::event::Event;
use crate::models::StepId;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Fetched(reply) => {
            app.on_fetched(reply);
            Ok(())
        }
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.screen {
        Screen::Landing => handle_landing_key(app, key),
        Screen::Demo => handle_demo_key(app, key),
    }
    Ok(())
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('d') => app.open_demo(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Keys available on every step of the demo
fn handle_demo_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.next_step(),
            KeyCode::Char('p') => app.prev_step(),
            KeyCode::Char('r') => app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Reset)),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Close));
            return;
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        _ => {}
    }

    let Some(session) = app.active_session() else {
        return;
    };
    let step = session.current_step();
    // Once a form step has its result the inputs are gone
    let editing = !session.current_state().is_completed()
        && matches!(step, StepId::Profile | StepId::Goal);

    if editing {
        match step {
            StepId::Profile => handle_profile_key(app, key),
            _ => handle_goal_key(app, key),
        }
    } else {
        handle_step_key(app, step, key);
    }
}

/// Steps without text fields
fn handle_step_key(app: &mut App, step: StepId, key: KeyEvent) {
    match key.code {
        KeyCode::Enter if step == StepId::Summary => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Reset))
        }
        KeyCode::Enter => app.submit_step(),
        KeyCode::Char('n') | KeyCode::Right => app.next_step(),
        KeyCode::Char('b') | KeyCode::Left => app.prev_step(),
        KeyCode::Char('r') if step == StepId::Summary => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Reset))
        }
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.profile_form;
    let on_text = form.on_text_field();
    match key.code {
        KeyCode::Enter => {
            app.submit_step();
            return;
        }
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Down if on_text => form.next_field(),
        KeyCode::Up if on_text => form.prev_field(),
        KeyCode::Up | KeyCode::Left if !on_text => form.cycle_choice(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') if !on_text => form.cycle_choice(1),
        _ => {
            if let Some(input) = form.focused_input() {
                edit_input(input, key);
            }
        }
    }
    app.sync_form();
}

fn handle_goal_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.goal_form;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
        KeyCode::Enter => {
            app.submit_step();
            return;
        }
        _ => edit_input(form.focused_input(), key),
    }
    app.sync_form();
}

/// Standard line-editing keys for a focused text input
fn edit_input(input: &mut super::widgets::TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::Confirm(action) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                match action {
                    ConfirmAction::Reset => app.reset_demo(),
                    ConfirmAction::Close => app.close_demo(),
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::{MockResponseService, ResponseService};
    use crate::tui::forms::GoalField;
    use std::sync::{mpsc, Arc};
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    fn with_app(test: impl FnOnce(&mut App)) {
        let runtime = Runtime::new().unwrap();
        let settings = Settings::default();
        let (sender, _receiver) = mpsc::channel();
        let service: Arc<dyn ResponseService> =
            Arc::new(MockResponseService::with_delay(Duration::from_secs(60)));
        let mut app = App::new(&settings, service, runtime.handle().clone(), sender);
        test(&mut app);
    }

    #[test]
    fn test_enter_on_landing_opens_demo() {
        with_app(|app| {
            handle_event(app, key(KeyCode::Enter)).unwrap();
            assert_eq!(app.screen, Screen::Demo);
            assert_eq!(app.current_step(), Some(StepId::Profile));
        });
    }

    #[test]
    fn test_typing_updates_form_data() {
        with_app(|app| {
            app.open_demo();
            type_text(app, "Alex");
            handle_event(app, key(KeyCode::Tab)).unwrap();
            type_text(app, "24");
            handle_event(app, key(KeyCode::Tab)).unwrap();
            handle_event(app, key(KeyCode::Down)).unwrap();

            let form = app.active_session().unwrap().form();
            assert_eq!(form.name, "Alex");
            assert_eq!(form.age, Some(24));
            assert!(form.primary_goal.is_some());
            assert!(form.risk_tolerance.is_none());
        });
    }

    #[test]
    fn test_q_is_typed_into_name_field() {
        with_app(|app| {
            app.open_demo();
            type_text(app, "q");
            assert!(!app.should_quit);
            assert_eq!(app.active_session().unwrap().form().name, "q");
        });
    }

    #[test]
    fn test_ctrl_navigation() {
        with_app(|app| {
            app.open_demo();
            handle_event(app, ctrl('n')).unwrap();
            assert_eq!(app.current_step(), Some(StepId::Connection));
            handle_event(app, ctrl('p')).unwrap();
            handle_event(app, ctrl('p')).unwrap();
            assert_eq!(app.current_step(), Some(StepId::Profile));
        });
    }

    #[test]
    fn test_reset_asks_for_confirmation() {
        with_app(|app| {
            app.open_demo();
            type_text(app, "Al");
            handle_event(app, ctrl('n')).unwrap();

            handle_event(app, ctrl('r')).unwrap();
            assert_eq!(
                app.active_dialog,
                ActiveDialog::Confirm(ConfirmAction::Reset)
            );
            handle_event(app, key(KeyCode::Char('n'))).unwrap();
            assert_eq!(app.current_step(), Some(StepId::Connection));

            handle_event(app, ctrl('r')).unwrap();
            handle_event(app, key(KeyCode::Char('y'))).unwrap();
            assert_eq!(app.current_step(), Some(StepId::Profile));
            assert!(app.active_session().unwrap().form().is_empty());
            assert!(app.profile_form.name_input.value().is_empty());
        });
    }

    #[test]
    fn test_escape_closes_to_landing() {
        with_app(|app| {
            app.open_demo();
            handle_event(app, key(KeyCode::Esc)).unwrap();
            handle_event(app, key(KeyCode::Enter)).unwrap();
            assert_eq!(app.screen, Screen::Landing);
            assert!(app.active_session().is_none());
        });
    }

    #[test]
    fn test_goal_fields_toggle() {
        with_app(|app| {
            app.open_demo();
            for _ in 0..3 {
                handle_event(app, ctrl('n')).unwrap();
            }
            assert_eq!(app.current_step(), Some(StepId::Goal));

            type_text(app, "10000");
            handle_event(app, key(KeyCode::Tab)).unwrap();
            assert_eq!(app.goal_form.focused_field, GoalField::MonthlySavings);
            type_text(app, "500");

            let form = app.active_session().unwrap().form();
            assert_eq!(form.emergency_fund_target.dollars(), 10_000);
            assert_eq!(form.monthly_savings.dollars(), 500);
        });
    }

    #[test]
    fn test_garbled_goal_amount_shows_error() {
        with_app(|app| {
            app.open_demo();
            for _ in 0..3 {
                handle_event(app, ctrl('n')).unwrap();
            }

            type_text(app, "1.xé");
            let message = app.goal_form.error_message.clone().unwrap();
            assert!(message.contains("Invalid money format"));

            for _ in 0..4 {
                handle_event(app, key(KeyCode::Backspace)).unwrap();
            }
            type_text(app, "92233720368547759");
            assert!(app.goal_form.error_message.is_some());

            handle_event(app, key(KeyCode::Enter)).unwrap();
            assert!(!app.active_session().unwrap().current_state().is_loading());
        });
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        with_app(|app| {
            app.open_demo();
            handle_event(app, ctrl('c')).unwrap();
            assert!(app.should_quit);
        });
    }
}
