//! Client-side order wizard.
//!
//! A three-step stepper (service, budget, contact details) that gates each
//! step locally, submits one [`common::OrderRequest`] through an
//! [`OrderGateway`], and resets itself after a successful submission.
//!
//! Rendering is left to the host. The host drives the wizard through
//! [`OrderWizard`], plays step animations through a [`StepAnimator`], and
//! shares an [`OrderDialog`] between the launchers that open the form.

pub mod animation;
pub mod dialog;
pub mod error;
pub mod gateway;
pub mod intent;
pub mod machine;
pub mod notice;
pub mod popup;
pub mod step;

pub use animation::{Direction, NoopAnimator, SlideTiming, StepAnimator, TimedAnimator};
pub use dialog::OrderDialog;
pub use error::GatewayError;
pub use gateway::{HttpOrderGateway, InMemoryOrderGateway, OrderGateway};
pub use intent::{OrderIntent, can_advance};
pub use machine::{
    InertReason, OrderWizard, SubmitOutcome, Transition, WizardBuilder, WizardConfig, WizardState,
};
pub use notice::{Notice, NoticeKind};
pub use popup::AwarenessPopup;
pub use step::WizardStep;
