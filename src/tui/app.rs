//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the wizard session and hands fetches to the tokio runtime; results
//! come back through the event channel as [`Event::Fetched`].

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::SavrError;
use crate::models::StepId;
use crate::services::ResponseService;
use crate::wizard::{FetchOutcome, FetchReply, FetchRequest, WizardSession};

use super::event::Event;
use super::forms::{GoalFormState, ProfileFormState};
use super::widgets::{Notification, NotificationQueue};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Product page with the "Try Demo" call to action
    #[default]
    Landing,
    /// The wizard modal
    Demo,
}

/// An action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Reset,
    Close,
}

impl ConfirmAction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Reset => "Start over? Your answers will be cleared.",
            Self::Close => "Close the demo? Your progress will be lost.",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(ConfirmAction),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub screen: Screen,

    pub active_dialog: ActiveDialog,

    /// The wizard; `None` until the demo is first opened
    pub session: Option<WizardSession>,

    pub profile_form: ProfileFormState,

    pub goal_form: GoalFormState,

    pub notifications: NotificationQueue,

    service: Arc<dyn ResponseService>,
    runtime: Handle,
    events: mpsc::Sender<Event>,
    pending: Vec<JoinHandle<()>>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        settings: &'a Settings,
        service: Arc<dyn ResponseService>,
        runtime: Handle,
        events: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            settings,
            should_quit: false,
            screen: Screen::default(),
            active_dialog: ActiveDialog::default(),
            session: None,
            profile_form: ProfileFormState::new(),
            goal_form: GoalFormState::new(),
            notifications: NotificationQueue::new(),
            service,
            runtime,
            events,
            pending: Vec::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.cancel_pending();
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The open session, if the demo is showing
    pub fn active_session(&self) -> Option<&WizardSession> {
        self.session.as_ref().filter(|s| s.is_open())
    }

    pub fn current_step(&self) -> Option<StepId> {
        self.active_session().map(WizardSession::current_step)
    }

    /// Open the demo modal from the landing screen
    pub fn open_demo(&mut self) {
        match self.session.as_mut() {
            Some(session) => session.reopen(),
            None => self.session = Some(WizardSession::open()),
        }
        self.profile_form = ProfileFormState::new();
        self.goal_form = GoalFormState::new();
        self.screen = Screen::Demo;
    }

    /// Close the demo and return to the landing screen
    pub fn close_demo(&mut self) {
        self.cancel_pending();
        if let Some(session) = self.session.as_mut() {
            session.close();
        }
        self.notifications.clear();
        self.screen = Screen::Landing;
    }

    /// Back to the first step with every answer cleared
    pub fn reset_demo(&mut self) {
        self.cancel_pending();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.reset() {
            self.notify_error(&e);
            return;
        }
        self.profile_form = ProfileFormState::new();
        self.goal_form = GoalFormState::new();
        self.notifications.push(Notification::info("Demo restarted"));
    }

    pub fn next_step(&mut self) {
        let result = match self.session.as_mut() {
            Some(session) if session.can_advance() => session.advance(),
            _ => return,
        };
        match result {
            Ok(Some(request)) => self.dispatch(request),
            Ok(None) => {}
            Err(e) => self.notify_error(&e),
        }
    }

    pub fn prev_step(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.retreat() {
                self.notify_error(&e);
            }
        }
    }

    /// Copy the visible form fields into the session
    ///
    /// Parse problems are shown under the form; returns whether the fields
    /// were all understood.
    pub fn sync_form(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let step = session.current_step();
        let Ok(form) = session.form_mut() else {
            return false;
        };
        let result = match step {
            StepId::Profile => self.profile_form.apply(form),
            StepId::Goal => self.goal_form.apply(form),
            _ => Ok(()),
        };
        let ok = result.is_ok();
        self.set_form_error(step, result.err());
        ok
    }

    /// Press the current step's action button (submit or retry)
    pub fn submit_step(&mut self) {
        if !self.sync_form() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let step = session.current_step();
        match session.submit() {
            Ok(request) => {
                self.set_form_error(step, None);
                self.dispatch(request);
            }
            Err(SavrError::Validation(missing)) => {
                self.set_form_error(step, Some(missing.to_string()));
            }
            Err(e) => debug!(step = %step, error = %e, "submit ignored"),
        }
    }

    /// Apply a finished fetch
    pub fn on_fetched(&mut self, reply: FetchReply) {
        self.pending.retain(|handle| !handle.is_finished());
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.apply(reply) {
            FetchOutcome::Completed(step) => {
                self.notifications
                    .push(Notification::success(format!("{} complete", step.label())));
            }
            FetchOutcome::Failed { step, reason } => {
                self.notifications.push(Notification::error(format!(
                    "{} failed: {}. Press Enter to retry.",
                    step.label(),
                    reason
                )));
            }
            FetchOutcome::Stale => {}
        }
    }

    /// Number of fetches still running
    pub fn pending_fetches(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Run a fetch on the runtime; the reply arrives as an event
    fn dispatch(&mut self, request: FetchRequest) {
        let service = Arc::clone(&self.service);
        let sender = self.events.clone();
        let step = request.ticket.step;
        let handle = self.runtime.spawn(async move {
            let reply = request.run(service.as_ref()).await;
            // The loop may have exited; nothing left to tell
            let _ = sender.send(Event::Fetched(reply));
        });
        debug!(step = %step, "fetch dispatched");
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(handle);
    }

    fn cancel_pending(&mut self) {
        if !self.pending.is_empty() {
            info!(count = self.pending.len(), "cancelling in-flight fetches");
        }
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    fn set_form_error(&mut self, step: StepId, message: Option<String>) {
        match step {
            StepId::Profile => self.profile_form.error_message = message,
            StepId::Goal => self.goal_form.error_message = message,
            _ => {
                if let Some(message) = message {
                    self.notifications.push(Notification::error(message));
                }
            }
        }
    }

    fn notify_error(&mut self, err: &SavrError) {
        self.notifications.push(Notification::error(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepStatus;
    use crate::services::MockResponseService;
    use crate::tui::widgets::TextInput;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn harness() -> (Runtime, Settings, mpsc::Sender<Event>, mpsc::Receiver<Event>) {
        let runtime = Runtime::new().unwrap();
        let (sender, receiver) = mpsc::channel();
        (runtime, Settings::default(), sender, receiver)
    }

    fn app<'a>(
        settings: &'a Settings,
        runtime: &Runtime,
        sender: mpsc::Sender<Event>,
        delay: Duration,
    ) -> App<'a> {
        let service: Arc<dyn ResponseService> = Arc::new(MockResponseService::with_delay(delay));
        App::new(settings, service, runtime.handle().clone(), sender)
    }

    fn wait_for_reply(receiver: &mpsc::Receiver<Event>) -> FetchReply {
        loop {
            match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
                Event::Fetched(reply) => return reply,
                _ => continue,
            }
        }
    }

    #[test]
    fn test_starts_on_landing() {
        let (runtime, settings, sender, _receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::ZERO);
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.current_step().is_none());

        app.open_demo();
        assert_eq!(app.screen, Screen::Demo);
        assert_eq!(app.current_step(), Some(StepId::Profile));
    }

    #[test]
    fn test_empty_profile_shows_validation_error() {
        let (runtime, settings, sender, _receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::ZERO);
        app.open_demo();

        app.submit_step();
        assert_eq!(
            app.profile_form.error_message.as_deref(),
            Some("Name is required")
        );
        assert_eq!(app.pending_fetches(), 0);
        let session = app.active_session().unwrap();
        assert_eq!(session.current_state().status(), &StepStatus::NotStarted);
    }

    #[test]
    fn test_profile_submit_completes() {
        let (runtime, settings, sender, receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::ZERO);
        app.open_demo();
        app.profile_form.name_input = TextInput::new().content("Alex");
        app.profile_form.goal_index = Some(2);
        app.profile_form.risk_index = Some(1);

        app.submit_step();
        assert!(app.active_session().unwrap().current_state().is_loading());

        let reply = wait_for_reply(&receiver);
        app.on_fetched(reply);

        let session = app.active_session().unwrap();
        assert!(session.current_state().is_completed());
        assert_eq!(session.form().name, "Alex");
        assert!(app.profile_form.error_message.is_none());
        assert!(app.notifications.current().unwrap().message.contains("Onboarding Quiz"));
    }

    #[test]
    fn test_failed_connection_can_be_retried() {
        let (runtime, settings, sender, receiver) = harness();
        let service = Arc::new(MockResponseService::with_delay(Duration::ZERO));
        service.fail_next(crate::services::Endpoint::Connection, 1);
        let mut app = App::new(&settings, service, runtime.handle().clone(), sender);
        app.open_demo();
        app.next_step();

        app.submit_step();
        app.on_fetched(wait_for_reply(&receiver));
        let session = app.active_session().unwrap();
        assert!(session.current_state().failure().is_some());
        assert_eq!(session.current_step(), StepId::Connection);

        app.submit_step();
        app.on_fetched(wait_for_reply(&receiver));
        assert!(app.active_session().unwrap().current_state().is_completed());
    }

    #[test]
    fn test_reset_cancels_in_flight_fetch() {
        let (runtime, settings, sender, receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::from_secs(60));
        app.open_demo();
        app.next_step();
        app.submit_step();
        assert_eq!(app.pending_fetches(), 1);

        app.reset_demo();
        assert_eq!(app.pending_fetches(), 0);
        assert_eq!(app.current_step(), Some(StepId::Profile));
        assert!(app.active_session().unwrap().form().is_empty());
        assert!(receiver.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_reply_after_reset_is_ignored() {
        let (runtime, settings, sender, receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::ZERO);
        app.open_demo();
        app.next_step();
        app.submit_step();

        let reply = wait_for_reply(&receiver);
        app.reset_demo();
        app.next_step();
        app.on_fetched(reply);

        let session = app.active_session().unwrap();
        assert_eq!(session.current_state().status(), &StepStatus::NotStarted);
    }

    #[test]
    fn test_close_then_reopen_starts_fresh() {
        let (runtime, settings, sender, _receiver) = harness();
        let mut app = app(&settings, &runtime, sender, Duration::ZERO);
        app.open_demo();
        app.next_step();
        app.next_step();

        app.close_demo();
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.active_session().is_none());

        app.open_demo();
        assert_eq!(app.current_step(), Some(StepId::Profile));
        assert!(app.profile_form.name_input.value().is_empty());
    }
}
