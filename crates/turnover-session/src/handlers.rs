use tracing::{debug, debug_span};

use turnover_core::fields;
use turnover_core::record::SinkError;
use turnover_core::settings::settings;
use turnover_core::suggest::suggest;

use super::response;
use super::types::{
    is_cancel, Draft, SessionState, StepResponse, WizardStep, CANCEL_COMMAND, CANCEL_LABEL,
    START_COMMAND,
};
use super::WizardSession;

impl WizardSession {
    /// Process one chat message. Whitespace is stripped here, so every step
    /// handler (and the suggestion fragment) sees trimmed text.
    pub fn handle_message(&mut self, text: &str) -> Result<StepResponse, SinkError> {
        let text = text.trim();
        let _span = debug_span!("handle_message", user = self.user).entered();

        match text {
            START_COMMAND => Ok(self.start()),
            CANCEL_COMMAND => Ok(self.cancel()),
            _ => match self.current_step() {
                None => Ok(response::idle_hint()),
                Some(WizardStep::Date) => Ok(self.handle_date(text)),
                Some(WizardStep::Company) => Ok(self.handle_company(text)),
                Some(WizardStep::Checks) => Ok(self.handle_checks(text)),
                Some(WizardStep::Total) => self.handle_total(text),
            },
        }
    }

    /// Begin a new draft. Any in-flight draft is discarded.
    fn start(&mut self) -> StepResponse {
        self.state = SessionState::Collecting(Draft::new());
        response::date_prompt()
    }

    fn handle_date(&mut self, text: &str) -> StepResponse {
        if fields::parse_date(text).is_none() {
            return response::date_error();
        }
        let d = self.draft();
        d.date = text.to_string();
        d.step = WizardStep::Company;
        response::company_prompt()
    }

    fn handle_company(&mut self, text: &str) -> StepResponse {
        if is_cancel(text) {
            return self.cancel();
        }

        let resp = {
            // read().ok() intentionally ignores RwLock poison — if another
            // thread panicked we degrade to history-less suggestions rather
            // than cascading the panic.
            let h_guard = self.history.read().ok();
            let entries = h_guard
                .as_ref()
                .map(|h| h.entries(self.user))
                .unwrap_or(&[]);
            suggest(&self.pool, entries, text)
        };

        if resp.exact {
            // The literal typed text is what commits, not the stored casing.
            self.record_company(text);
            let d = self.draft();
            d.company = text.to_string();
            d.step = WizardStep::Checks;
            return response::checks_prompt();
        }

        if resp.matches.is_empty() {
            return response::company_error();
        }

        debug!(match_count = resp.matches.len(), "partial company query");
        let mut options: Vec<String> = resp
            .matches
            .into_iter()
            .take(settings().suggest.max_results)
            .collect();
        options.push(CANCEL_LABEL.to_string());
        response::company_options(options)
    }

    fn handle_checks(&mut self, text: &str) -> StepResponse {
        if is_cancel(text) {
            return self.cancel();
        }
        if !fields::is_count(text) {
            return response::count_error();
        }
        let d = self.draft();
        d.checks = text.to_string();
        d.step = WizardStep::Total;
        response::total_prompt()
    }

    fn handle_total(&mut self, text: &str) -> Result<StepResponse, SinkError> {
        if is_cancel(text) {
            return Ok(self.cancel());
        }
        if !fields::is_count(text) {
            return Ok(response::count_error());
        }
        self.commit_record(text)
    }
}
