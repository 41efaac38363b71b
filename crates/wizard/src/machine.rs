//! The order wizard state machine.
//!
//! State transitions:
//! ```text
//! Service ──next──► Budget ──next──► Details ──submit──► Submitting
//!    ▲                 │  ▲             │                 │     │
//!    └──────back───────┘  └────back─────┘      failure ◄──┘     │
//!    ▲                                    (back to Details)     │
//!    └───────────────────── success (fields cleared) ◄──────────┘
//! ```
//!
//! Guard failures never raise errors; the call is inert and reports why.
//! Step changes are serialized: while one `next`/`back` is animating, further
//! `next`/`back`/`submit` calls are dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::{BudgetTier, ServiceKind};

use crate::animation::{Direction, NoopAnimator, StepAnimator};
use crate::gateway::OrderGateway;
use crate::intent::{OrderIntent, can_advance};
use crate::notice::Notice;
use crate::step::WizardStep;

/// Callback run once per successful submission, e.g. to close a dialog.
pub type SuccessCallback = Arc<dyn Fn() + Send + Sync>;

/// Why a wizard call had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertReason {
    /// Continue on the service step with no service selected.
    NoServiceSelected,
    /// Continue on the budget step with no budget selected.
    NoBudgetSelected,
    /// Submit without both name and email.
    MissingContact,
    /// Back on the first step.
    AtFirstStep,
    /// Continue on the last step; use submit instead.
    AtLastStep,
    /// The call does not apply to the current step.
    WrongStep,
    /// A step transition is still animating.
    TransitionInFlight,
    /// A submission is still waiting for the dispatcher.
    SubmissionInFlight,
}

impl InertReason {
    fn for_gate(step: WizardStep) -> Self {
        match step {
            WizardStep::Service => InertReason::NoServiceSelected,
            WizardStep::Budget => InertReason::NoBudgetSelected,
            WizardStep::Details => InertReason::MissingContact,
        }
    }
}

/// Result of a navigation or edit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The wizard moved to another step.
    Moved { from: WizardStep, to: WizardStep },
    /// A field on the current step was changed.
    Updated,
    /// Nothing happened.
    Inert(InertReason),
}

/// Result of a submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The dispatcher accepted the order; the wizard was reset.
    Sent(Notice),
    /// The order was not accepted; entered data is kept.
    Failed(Notice),
    /// No request was made.
    Inert(InertReason),
}

/// Host-specific wizard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Offered in the failure notice as another way to get in touch.
    pub alternate_contact_url: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            alternate_contact_url: "https://wa.me/6285169954034".to_string(),
        }
    }
}

/// Everything the wizard tracks between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub intent: OrderIntent,
    pub is_submitting: bool,
    pub transition_in_flight: bool,
}

impl WizardState {
    /// Returns true if the primary button (Continue or Submit) is enabled.
    pub fn can_proceed(&self) -> bool {
        let busy = self.transition_in_flight || self.is_submitting;
        !busy && can_advance(self.current_step, &self.intent)
    }

    fn busy_reason(&self) -> Option<InertReason> {
        if self.transition_in_flight {
            Some(InertReason::TransitionInFlight)
        } else if self.is_submitting {
            Some(InertReason::SubmissionInFlight)
        } else {
            None
        }
    }
}

struct Shared<G, A> {
    state: Mutex<WizardState>,
    gateway: G,
    animator: A,
    config: WizardConfig,
    on_submit_success: Option<SuccessCallback>,
}

/// Resets a busy flag when dropped, so a cancelled transition or submission
/// never leaves the wizard locked.
struct FlagReset<'a> {
    state: &'a Mutex<WizardState>,
    reset: fn(&mut WizardState),
}

impl FlagReset<'_> {
    /// Skips the reset because the caller already cleared the flag.
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for FlagReset<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        (self.reset)(&mut state);
    }
}

/// Builder for [`OrderWizard`].
pub struct WizardBuilder<G, A = NoopAnimator> {
    gateway: G,
    animator: A,
    config: WizardConfig,
    on_submit_success: Option<SuccessCallback>,
}

impl<G: OrderGateway, A: StepAnimator> WizardBuilder<G, A> {
    /// Replaces the animator used for step transitions.
    pub fn animator<B: StepAnimator>(self, animator: B) -> WizardBuilder<G, B> {
        WizardBuilder {
            gateway: self.gateway,
            animator,
            config: self.config,
            on_submit_success: self.on_submit_success,
        }
    }

    pub fn config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a callback invoked once after each successful submission.
    pub fn on_submit_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_submit_success = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> OrderWizard<G, A> {
        OrderWizard {
            inner: Arc::new(Shared {
                state: Mutex::new(WizardState::default()),
                gateway: self.gateway,
                animator: self.animator,
                config: self.config,
                on_submit_success: self.on_submit_success,
            }),
        }
    }
}

/// The multi-step order form.
///
/// Cheap to clone; clones drive the same wizard. State is never locked
/// across an await, so reads stay available while a transition animates or
/// a submission is in flight.
pub struct OrderWizard<G, A = NoopAnimator> {
    inner: Arc<Shared<G, A>>,
}

impl<G, A> Clone for OrderWizard<G, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<G: OrderGateway> OrderWizard<G, NoopAnimator> {
    /// Creates a wizard with default settings and no animation.
    pub fn new(gateway: G) -> Self {
        Self::builder(gateway).build()
    }

    pub fn builder(gateway: G) -> WizardBuilder<G, NoopAnimator> {
        WizardBuilder {
            gateway,
            animator: NoopAnimator,
            config: WizardConfig::default(),
            on_submit_success: None,
        }
    }
}

impl<G: OrderGateway, A: StepAnimator> OrderWizard<G, A> {
    fn lock(&self) -> MutexGuard<'_, WizardState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> WizardState {
        self.lock().clone()
    }

    pub fn current_step(&self) -> WizardStep {
        self.lock().current_step
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting
    }

    pub fn config(&self) -> &WizardConfig {
        &self.inner.config
    }

    /// Selects a service. Does not advance; the last selection wins.
    pub fn select_service(&self, service: ServiceKind) -> Transition {
        self.edit(WizardStep::Service, |intent| intent.service = Some(service))
    }

    /// Selects a budget tier. Does not advance; the last selection wins.
    pub fn select_budget(&self, budget: BudgetTier) -> Transition {
        self.edit(WizardStep::Budget, |intent| intent.budget = Some(budget))
    }

    pub fn set_name(&self, name: impl Into<String>) -> Transition {
        let name = name.into();
        self.edit(WizardStep::Details, |intent| intent.name = name)
    }

    pub fn set_email(&self, email: impl Into<String>) -> Transition {
        let email = email.into();
        self.edit(WizardStep::Details, |intent| intent.email = email)
    }

    pub fn set_details(&self, details: impl Into<String>) -> Transition {
        let details = details.into();
        self.edit(WizardStep::Details, |intent| intent.details = details)
    }

    fn edit(&self, step: WizardStep, apply: impl FnOnce(&mut OrderIntent)) -> Transition {
        let mut state = self.lock();
        if state.current_step != step {
            return Transition::Inert(InertReason::WrongStep);
        }
        if state.is_submitting {
            return Transition::Inert(InertReason::SubmissionInFlight);
        }
        apply(&mut state.intent);
        Transition::Updated
    }

    /// Continue: moves to the next step if the current step's gate passes.
    pub async fn next(&self) -> Transition {
        let (from, to) = {
            let mut state = self.lock();
            if let Some(reason) = state.busy_reason() {
                return Transition::Inert(reason);
            }
            let Some(to) = state.current_step.next() else {
                return Transition::Inert(InertReason::AtLastStep);
            };
            if !can_advance(state.current_step, &state.intent) {
                return Transition::Inert(InertReason::for_gate(state.current_step));
            }
            state.transition_in_flight = true;
            (state.current_step, to)
        };

        self.run_transition(from, to, Direction::Forward).await
    }

    /// Back: returns to the previous step. Entered data is kept.
    pub async fn back(&self) -> Transition {
        let (from, to) = {
            let mut state = self.lock();
            if let Some(reason) = state.busy_reason() {
                return Transition::Inert(reason);
            }
            let Some(to) = state.current_step.previous() else {
                return Transition::Inert(InertReason::AtFirstStep);
            };
            state.transition_in_flight = true;
            (state.current_step, to)
        };

        self.run_transition(from, to, Direction::Backward).await
    }

    async fn run_transition(
        &self,
        from: WizardStep,
        to: WizardStep,
        direction: Direction,
    ) -> Transition {
        let _reset = FlagReset {
            state: &self.inner.state,
            reset: |state| state.transition_in_flight = false,
        };

        self.inner.animator.exit(direction).await;
        self.lock().current_step = to;
        tracing::debug!(%from, %to, "wizard step changed");
        self.inner.animator.enter(direction).await;

        Transition::Moved { from, to }
    }

    /// Submits the order from the details step.
    ///
    /// Exactly one gateway call is made per accepted invocation; calls made
    /// while a submission is in flight are inert. On success the wizard is
    /// reset to the first step and the success callback runs. On failure the
    /// wizard stays on the details step with everything the lead entered.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.lock();
            if let Some(reason) = state.busy_reason() {
                return SubmitOutcome::Inert(reason);
            }
            if !state.current_step.is_last() {
                return SubmitOutcome::Inert(InertReason::WrongStep);
            }
            if !can_advance(WizardStep::Details, &state.intent) {
                return SubmitOutcome::Inert(InertReason::MissingContact);
            }
            state.is_submitting = true;
            state.intent.to_request()
        };

        let submitting = FlagReset {
            state: &self.inner.state,
            reset: |state| state.is_submitting = false,
        };

        match self.inner.gateway.submit(&request).await {
            Ok(_) => {
                {
                    let mut state = self.lock();
                    state.current_step = WizardStep::Service;
                    state.intent = OrderIntent::default();
                    state.is_submitting = false;
                }
                submitting.disarm();
                tracing::info!(service = %request.service, "order submitted");
                if let Some(callback) = &self.inner.on_submit_success {
                    callback();
                }
                SubmitOutcome::Sent(Notice::submitted())
            }
            Err(err) => {
                tracing::warn!(error = %err, "error submitting order");
                SubmitOutcome::Failed(Notice::failed(
                    self.inner.config.alternate_contact_url.clone(),
                ))
            }
        }
    }
}
