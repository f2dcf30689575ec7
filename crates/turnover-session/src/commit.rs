use turnover_core::record::{SalesRecord, SinkError};

use super::response;
use super::types::{SessionState, StepResponse};
use super::WizardSession;

impl WizardSession {
    /// Append the confirmed company to the user's history, exactly as typed.
    pub(super) fn record_company(&mut self, literal: &str) {
        // Poisoned lock: skip the write and keep the wizard going; the
        // confirmed value still commits with this record.
        if let Ok(mut h) = self.history.write() {
            h.record(self.user, literal);
        }
    }

    /// Build the finished record and push it to the sink. State resets only
    /// after a successful append, so a sink failure leaves the draft intact
    /// and the user can resend the total.
    pub(super) fn commit_record(&mut self, total: &str) -> Result<StepResponse, SinkError> {
        let d = self.draft();
        let record = SalesRecord {
            date: d.date.clone(),
            company: d.company.clone(),
            checks: d.checks.clone(),
            total: total.to_string(),
        };
        self.sink.append(&record)?;
        self.reset_state();
        Ok(response::saved(record))
    }

    /// Discard any in-flight draft.
    pub(super) fn cancel(&mut self) -> StepResponse {
        self.reset_state();
        response::cancelled()
    }

    pub(super) fn reset_state(&mut self) {
        self.state = SessionState::Idle;
    }
}
