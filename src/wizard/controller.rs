//! Wizard controller
//!
//! [`WizardSession`] owns the current step, the accumulated form data and the
//! state of every step. Fetches are split in two halves so that a front end
//! can run them wherever it likes:
//!
//! 1. [`WizardSession::submit`] (or the on-enter hook inside
//!    [`WizardSession::advance`]) puts the step into `Loading` and hands back
//!    a [`FetchRequest`].
//! 2. The caller runs the request against a [`ResponseService`] and passes the
//!    [`FetchReply`] to [`WizardSession::apply`].
//!
//! Every request carries a ticket stamped with the session generation. Reset
//! and close bump the generation, so replies that arrive afterwards are
//! reported as stale and dropped.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::steps::{view_for, FetchTrigger, StepView};
use crate::error::{SavrError, SavrResult};
use crate::models::{FormData, Payload, StepId, StepState, StepStatus, STEP_COUNT};
use crate::services::{Endpoint, ResponseService};

/// Identifies which step and which session generation a fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub step: StepId,
    generation: u64,
}

/// A fetch the caller must run against a response service
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub endpoint: Endpoint,
    pub input: serde_json::Value,
}

impl FetchRequest {
    /// Run the request and package the result for [`WizardSession::apply`]
    pub async fn run(self, service: &dyn ResponseService) -> FetchReply {
        let result = service.respond(&self.endpoint, self.input).await;
        FetchReply {
            ticket: self.ticket,
            result,
        }
    }
}

/// The result of a fetch, still tagged with its ticket
#[derive(Debug)]
pub struct FetchReply {
    pub ticket: FetchTicket,
    pub result: SavrResult<Payload>,
}

/// What applying a reply did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Completed(StepId),
    /// The step is now failed and may be retried
    Failed { step: StepId, reason: String },
    /// The reply belonged to a session that has since been reset or closed
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Closed,
}

/// One run of the demo wizard
#[derive(Debug)]
pub struct WizardSession {
    id: Uuid,
    opened_at: DateTime<Utc>,
    phase: Phase,
    current: StepId,
    form: FormData,
    states: [StepState; STEP_COUNT],
    generation: u64,
}

impl WizardSession {
    /// Open a new session on the first step
    pub fn open() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            phase: Phase::Open,
            current: StepId::first(),
            form: FormData::default(),
            states: Default::default(),
            generation: 0,
        };
        info!(
            session = %session.id,
            opened_at = %session.opened_at.to_rfc3339(),
            "wizard opened"
        );
        session
    }

    /// Re-initialize a session, fresh on the first step
    pub fn reopen(&mut self) {
        let generation = self.generation + 1;
        *self = Self::open();
        self.generation = generation;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn current_step(&self) -> StepId {
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current.index()
    }

    pub fn current_view(&self) -> &'static dyn StepView {
        view_for(self.current)
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Mutable access for the active step to record input
    pub fn form_mut(&mut self) -> SavrResult<&mut FormData> {
        self.ensure_open()?;
        Ok(&mut self.form)
    }

    pub fn state(&self, step: StepId) -> &StepState {
        &self.states[step.index()]
    }

    pub fn current_state(&self) -> &StepState {
        self.state(self.current)
    }

    pub fn can_advance(&self) -> bool {
        self.is_open() && !self.current.is_last()
    }

    pub fn can_retreat(&self) -> bool {
        self.is_open() && self.current.prev().is_some()
    }

    /// Move to the next step
    ///
    /// A no-op on the last step. Returns the on-enter fetch of the new step,
    /// if it has one that has not run yet.
    pub fn advance(&mut self) -> SavrResult<Option<FetchRequest>> {
        self.ensure_open()?;
        let Some(next) = self.current.next() else {
            debug!(session = %self.id, "advance ignored on last step");
            return Ok(None);
        };
        self.current = next;
        info!(session = %self.id, step = %next, "advanced");
        self.on_enter()
    }

    /// Move to the previous step; a no-op on the first step
    pub fn retreat(&mut self) -> SavrResult<()> {
        self.ensure_open()?;
        match self.current.prev() {
            Some(prev) => {
                self.current = prev;
                info!(session = %self.id, step = %prev, "retreated");
            }
            None => debug!(session = %self.id, "retreat ignored on first step"),
        }
        Ok(())
    }

    /// Back to the first step with empty form data and fresh step states
    pub fn reset(&mut self) -> SavrResult<()> {
        self.ensure_open()?;
        self.discard();
        info!(session = %self.id, generation = self.generation, "wizard reset");
        Ok(())
    }

    /// End the session; every other operation fails until reopened
    pub fn close(&mut self) {
        if self.phase == Phase::Closed {
            return;
        }
        self.discard();
        self.phase = Phase::Closed;
        let open_for = Utc::now() - self.opened_at;
        info!(
            session = %self.id,
            open_secs = open_for.num_seconds(),
            "wizard closed"
        );
    }

    /// Whether the current step's action may be pressed right now
    pub fn can_submit(&self) -> bool {
        let view = self.current_view();
        self.is_open()
            && view.endpoint().is_some()
            && view.trigger() != FetchTrigger::Never
            && self.current_state().can_start()
            && view.validate(&self.form).is_ok()
            // on-enter steps only accept a manual retry after a failure
            && (view.trigger() == FetchTrigger::OnSubmit
                || self.current_state().failure().is_some())
    }

    /// Start the current step's fetch (first attempt or retry)
    pub fn submit(&mut self) -> SavrResult<FetchRequest> {
        self.ensure_open()?;
        let view = self.current_view();
        let step = self.current;

        if view.trigger() == FetchTrigger::OnEnter && self.current_state().failure().is_none() {
            return Err(SavrError::InvalidTransition(format!(
                "{} fetches automatically",
                step
            )));
        }
        view.validate(&self.form)?;
        self.start_fetch(step)?.ok_or_else(|| {
            SavrError::InvalidTransition(format!("{} has nothing to submit", step))
        })
    }

    /// Apply a finished fetch to the step that requested it
    pub fn apply(&mut self, reply: FetchReply) -> FetchOutcome {
        let step = reply.ticket.step;
        if !self.is_open() || reply.ticket.generation != self.generation {
            debug!(session = %self.id, step = %step, "dropping stale reply");
            return FetchOutcome::Stale;
        }

        let state = &mut self.states[step.index()];
        match reply.result {
            Ok(payload) => match state.complete(payload) {
                Ok(()) => {
                    info!(session = %self.id, step = %step, "step completed");
                    FetchOutcome::Completed(step)
                }
                Err(e) => {
                    warn!(session = %self.id, step = %step, error = %e, "unexpected reply");
                    FetchOutcome::Stale
                }
            },
            Err(err) => {
                let reason = match err {
                    SavrError::Fetch { reason, .. } => reason,
                    other => other.to_string(),
                };
                if let Err(e) = state.fail(reason.clone()) {
                    warn!(session = %self.id, step = %step, error = %e, "unexpected reply");
                    return FetchOutcome::Stale;
                }
                warn!(session = %self.id, step = %step, reason = %reason, "step failed");
                FetchOutcome::Failed { step, reason }
            }
        }
    }

    /// Submit the current step and wait for the reply
    pub async fn submit_and_wait(
        &mut self,
        service: &dyn ResponseService,
    ) -> SavrResult<FetchOutcome> {
        let request = self.submit()?;
        let reply = request.run(service).await;
        Ok(self.apply(reply))
    }

    /// Advance and, if the new step fetches on enter, wait for it
    pub async fn advance_and_wait(
        &mut self,
        service: &dyn ResponseService,
    ) -> SavrResult<Option<FetchOutcome>> {
        match self.advance()? {
            Some(request) => {
                let reply = request.run(service).await;
                Ok(Some(self.apply(reply)))
            }
            None => Ok(None),
        }
    }

    /// Invoked once each time a step becomes active
    fn on_enter(&mut self) -> SavrResult<Option<FetchRequest>> {
        let step = self.current;
        if view_for(step).trigger() != FetchTrigger::OnEnter {
            return Ok(None);
        }
        if *self.state(step).status() != StepStatus::NotStarted {
            // already fetched (or fetching) since the last reset
            return Ok(None);
        }
        self.start_fetch(step)
    }

    fn start_fetch(&mut self, step: StepId) -> SavrResult<Option<FetchRequest>> {
        let Some(endpoint) = view_for(step).endpoint() else {
            return Ok(None);
        };
        let input = serde_json::to_value(&self.form)?;
        self.states[step.index()].start()?;
        debug!(session = %self.id, step = %step, endpoint = %endpoint, "fetch started");

        Ok(Some(FetchRequest {
            ticket: FetchTicket {
                step,
                generation: self.generation,
            },
            endpoint,
            input,
        }))
    }

    fn discard(&mut self) {
        self.current = StepId::first();
        self.form = FormData::default();
        self.states = Default::default();
        self.generation += 1;
    }

    fn ensure_open(&self) -> SavrResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(SavrError::SessionClosed)
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::open()
    }
}
