//! Events raised by the dashboard core for the GUI to present.

use crossbeam_channel::{Sender, TrySendError};
use dashboard_core::{Decision, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Notice(String),
    ConfirmRequested(String),
}

/// Notifier that hands messages to the frame loop. Confirmations are always
/// deferred; the answer comes back as a `ResolveCancellation` intent.
pub struct GuiNotifier {
    ui_tx: Sender<UiEvent>,
}

impl GuiNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn push(&self, event: UiEvent) -> bool {
        match self.ui_tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("ui event queue is full; dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("ui event queue disconnected");
                false
            }
        }
    }
}

impl Notifier for GuiNotifier {
    fn notify(&mut self, message: &str) {
        self.push(UiEvent::Notice(message.to_string()));
    }

    fn confirm(&mut self, message: &str) -> Decision {
        if self.push(UiEvent::ConfirmRequested(message.to_string())) {
            Decision::Deferred
        } else {
            // Nobody can answer, so nothing may be mutated.
            Decision::Declined
        }
    }
}
