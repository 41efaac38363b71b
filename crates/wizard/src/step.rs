//! Wizard steps.

/// A step of the order wizard.
///
/// Step order:
/// ```text
/// Service ──► Budget ──► Details ──► (submit) ──► Service
///    ▲          │  ▲        │
///    └──────────┘  └────────┘   (back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Pick what is being built.
    #[default]
    Service,

    /// Pick a budget tier.
    Budget,

    /// Enter name, email, and an optional description.
    Details,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Service, WizardStep::Budget, WizardStep::Details];

    /// The step Continue leads to, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Service => Some(WizardStep::Budget),
            WizardStep::Budget => Some(WizardStep::Details),
            WizardStep::Details => None,
        }
    }

    /// The step Back leads to, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Service => None,
            WizardStep::Budget => Some(WizardStep::Service),
            WizardStep::Details => Some(WizardStep::Budget),
        }
    }

    /// Returns true if this step submits instead of continuing.
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Details)
    }

    /// Returns the step name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Service => "Service",
            WizardStep::Budget => "Budget",
            WizardStep::Details => "Details",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
