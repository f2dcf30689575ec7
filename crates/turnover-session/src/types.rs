use turnover_core::record::SalesRecord;

/// Field collection steps, in fixed wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Date,
    Company,
    Checks,
    Total,
}

pub(crate) enum SessionState {
    Idle,
    Collecting(Draft),
}

/// Per-traversal field values; discarded on completion or cancellation.
pub(crate) struct Draft {
    pub(crate) step: WizardStep,
    pub(crate) date: String,
    pub(crate) company: String,
    pub(crate) checks: String,
}

impl Draft {
    pub(crate) fn new() -> Self {
        Self {
            step: WizardStep::Date,
            date: String::new(),
            company: String::new(),
            checks: String::new(),
        }
    }
}

/// Reply keyboard action — exactly one of three states, so "show and remove
/// at once" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Leave whatever keyboard is currently showing untouched.
    Keep,
    /// Show one-tap options, one per row.
    Show { options: Vec<String> },
    /// Remove the custom keyboard.
    Remove,
}

/// Response from `handle_message`, rendered by the transport layer.
pub struct StepResponse {
    pub reply: String,
    pub keyboard: KeyboardAction,
    /// Set when this message completed a record and it was appended.
    pub committed: Option<SalesRecord>,
}

impl StepResponse {
    pub(crate) fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            keyboard: KeyboardAction::Keep,
            committed: None,
        }
    }

    pub(crate) fn with_options(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            keyboard: KeyboardAction::Show { options },
            ..Self::reply(text)
        }
    }
}

pub(crate) const CANCEL_LABEL: &str = "Cancel";
pub(crate) const START_COMMAND: &str = "/start";
pub(crate) const CANCEL_COMMAND: &str = "/cancel";

/// The date step does not check this; every later step does.
pub(crate) fn is_cancel(text: &str) -> bool {
    text.eq_ignore_ascii_case(CANCEL_LABEL)
}
