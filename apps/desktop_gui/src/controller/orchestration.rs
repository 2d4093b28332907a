//! Dispatch of UI intents into the dashboard, with a one-line status summary.

use dashboard_core::{CancelOutcome, Dashboard, FormInput, IntentOutcome, Notifier, ViewBinding};
use shared::protocol::UserIntent;

pub fn dispatch_intent<V, N, F>(
    dashboard: &mut Dashboard<V, N, F>,
    intent: UserIntent,
    status: &mut String,
) where
    V: ViewBinding,
    N: Notifier,
    F: FormInput,
{
    let intent_name = intent.name();
    if intent.is_navigation() {
        // A stale result line would read as if it belonged to the new view.
        status.clear();
    }
    let outcome = dashboard.handle(intent);
    tracing::debug!(intent = intent_name, ?outcome, "dispatched ui intent");

    match outcome {
        IntentOutcome::Navigated => {}
        IntentOutcome::Submitted(id) => {
            *status = format!("Booking #{} submitted", id.reference());
        }
        IntentOutcome::Cancellation(outcome) => {
            if let Some(text) = cancellation_status(&outcome) {
                *status = text;
            }
        }
    }
}

fn cancellation_status(outcome: &CancelOutcome) -> Option<String> {
    match outcome {
        CancelOutcome::Cancelled(record) => Some(format!("Booking #{} cancelled", record.reference())),
        CancelOutcome::Declined => Some("Cancellation dismissed".to_string()),
        CancelOutcome::AwaitingDecision(_) => None,
        CancelOutcome::Busy => Some("Answer the open cancellation first".to_string()),
        CancelOutcome::NotBound | CancelOutcome::AlreadyGone => {
            Some("That trip can no longer be cancelled".to_string())
        }
        CancelOutcome::NothingPending => None,
    }
}
