//! Order session state for the presentation adapter.
//!
//! This holds the single form being edited plus the bill summary while it is
//! open. Nothing here outlives the session.

use pizza_core::{Bill, FormEvent, FormModel, FormStatus, PriceTable, SubmitError};
use tracing::{debug, info, warn};

/// Everything the adapter can receive from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Form(FormEvent),
    /// Submit button pressed.
    Submit,
    /// Summary closed.
    Dismiss,
}

/// Result of handling one [`SessionEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The form changed; here is its new status.
    Updated(FormStatus),
    /// A submission was accepted and the summary opened with this bill.
    SummaryOpened(Bill),
    /// The submission was ignored, as a disabled button would be.
    SubmitRejected(SubmitError),
    SummaryClosed,
}

#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    form: FormModel,
    prices: PriceTable,
    /// Bill shown in the summary. `None` while the summary is closed.
    summary: Option<Bill>,
}

impl OrderSession {
    pub fn new(prices: PriceTable) -> Self {
        Self {
            prices,
            ..Default::default()
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn summary(&self) -> Option<&Bill> {
        self.summary.as_ref()
    }

    pub fn status(&self) -> FormStatus {
        self.form.status()
    }

    pub fn handle(
        &mut self,
        event: SessionEvent,
    ) -> Outcome {
        match event {
            SessionEvent::Form(event) => {
                self.form.apply(event);
                let status = self.form.status();
                debug!(
                    submit_enabled = status.submit_enabled,
                    errors = status.errors.len(),
                    "form updated"
                );
                Outcome::Updated(status)
            }
            SessionEvent::Submit => match self.form.submit(&self.prices) {
                Ok(bill) => {
                    info!(total = %bill.total, "order submitted");
                    self.summary = Some(bill.clone());
                    Outcome::SummaryOpened(bill)
                }
                Err(error) => {
                    warn!(%error, "submit ignored");
                    Outcome::SubmitRejected(error)
                }
            },
            SessionEvent::Dismiss => {
                self.summary = None;
                debug!("summary closed");
                Outcome::SummaryClosed
            }
        }
    }
}
