use serde::{Deserialize, Serialize};

use crate::domain::{BookingId, Section, TripStatus};

/// Everything a front-end can ask the dashboard to do.
///
/// Scripted sessions are newline-delimited JSON of this shape, e.g.
/// `{"type":"show_tab","payload":{"tab":"upcoming"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UserIntent {
    SwitchSection { section: Section },
    ShowTab { tab: TripStatus },
    SubmitBooking,
    CancelBooking { booking_id: BookingId },
    ResolveCancellation { affirmed: bool },
}

impl UserIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SwitchSection { .. } => "switch_section",
            Self::ShowTab { .. } => "show_tab",
            Self::SubmitBooking => "submit_booking",
            Self::CancelBooking { .. } => "cancel_booking",
            Self::ResolveCancellation { .. } => "resolve_cancellation",
        }
    }

    /// Navigation intents never touch the booking collection.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::SwitchSection { .. } | Self::ShowTab { .. })
    }
}
