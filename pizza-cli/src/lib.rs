//! Headless front end for the pizza order form.
//!
//! Replays a recorded stream of form events against one [`OrderSession`],
//! logging the form status after each event and writing every bill summary
//! that opens.

pub mod config;
pub mod event_loader;
pub mod logging;
pub mod render;
pub mod session;

use std::io::{self, Write};

use pizza_core::FormStatus;
use tracing::debug;

use crate::config::PricingConfig;
use crate::render::{render_bill, render_status};
use crate::session::{OrderSession, Outcome, SessionEvent};

/// Counters and end state of a replayed session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    /// Submissions that opened a summary.
    pub orders: usize,
    /// Submissions ignored because the form was not submittable.
    pub rejected: usize,
    pub final_status: FormStatus,
}

/// Feeds `events` through a fresh session and writes each opened bill to `out`.
pub fn run(
    events: impl IntoIterator<Item = SessionEvent>,
    config: &PricingConfig,
    out: &mut impl Write,
) -> io::Result<RunSummary> {
    let mut session = OrderSession::new(config.prices.clone());
    let mut summary = RunSummary::default();

    for event in events {
        summary.events += 1;
        match session.handle(event) {
            Outcome::Updated(status) => debug!("status:\n{}", render_status(&status)),
            Outcome::SummaryOpened(bill) => {
                summary.orders += 1;
                writeln!(out, "{}\n", render_bill(&bill, &config.currency))?;
            }
            Outcome::SubmitRejected(_) => summary.rejected += 1,
            Outcome::SummaryClosed => {}
        }
    }

    summary.final_status = session.status();
    Ok(summary)
}
