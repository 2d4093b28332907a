//! Routes user intents to store mutations and keeps the view in step.

use shared::{
    domain::{BookingId, BookingRecord, Section, TripDetails, TripReference, TripStatus},
    error::DashboardError,
    protocol::UserIntent,
};
use storage::{BookingStore, IdSource};

use crate::{
    collaborators::{fields, Decision, ElementRef, FormInput, MapSurface, Notifier, ViewBinding},
    config::{MapSettings, Settings},
    navigation::Navigation,
    render::{render_all, CancelBindings},
};

/// Draws from the id source before falling back to the largest stored id + 1.
const MAX_ID_ATTEMPTS: usize = 64;

pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this booking?";

pub fn submitted_message(reference: TripReference) -> String {
    format!("✅ Booking successfully submitted! Tracking reference: #{reference}")
}

pub fn cancelled_message(reference: TripReference) -> String {
    format!("Booking #{reference} has been cancelled.")
}

pub struct Collaborators<V, N, F> {
    pub view: V,
    pub notifier: N,
    pub form: F,
}

/// A cancellation waiting on the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCancellation {
    pub booking_id: BookingId,
    pub reference: TripReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled(BookingRecord),
    Declined,
    AwaitingDecision(PendingCancellation),
    /// No cancel button exists for this id in the current render.
    NotBound,
    /// Another cancellation is still waiting for an answer.
    Busy,
    NothingPending,
    AlreadyGone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Navigated,
    Submitted(BookingId),
    Cancellation(CancelOutcome),
}

pub struct Dashboard<V, N, F> {
    store: BookingStore,
    ids: Box<dyn IdSource>,
    navigation: Navigation,
    cancel_bindings: CancelBindings,
    pending: Option<PendingCancellation>,
    map: MapSettings,
    view: V,
    notifier: N,
    form: F,
}

impl<V, N, F> Dashboard<V, N, F>
where
    V: ViewBinding,
    N: Notifier,
    F: FormInput,
{
    /// Checks the view wiring, activates the default section/tab and renders once.
    pub fn start(
        store: BookingStore,
        ids: Box<dyn IdSource>,
        collaborators: Collaborators<V, N, F>,
        settings: &Settings,
    ) -> Result<Self, DashboardError> {
        let Collaborators {
            view,
            notifier,
            form,
        } = collaborators;

        if let Some(missing) = ElementRef::required()
            .into_iter()
            .find(|element| !view.has_element(*element))
        {
            tracing::error!(element = %missing, "view is missing a required element");
            return Err(DashboardError::MissingElement(missing.to_string()));
        }

        let mut dashboard = Self {
            store,
            ids,
            navigation: Navigation::new(settings.default_section, settings.default_tab),
            cancel_bindings: CancelBindings::default(),
            pending: None,
            map: settings.map.clone(),
            view,
            notifier,
            form,
        };
        dashboard.navigation.apply(&mut dashboard.view);
        dashboard.render();

        tracing::info!(
            bookings = dashboard.store.len(),
            section = %dashboard.navigation.section(),
            tab = %dashboard.navigation.tab(),
            "dashboard started"
        );
        Ok(dashboard)
    }

    pub fn handle(&mut self, intent: UserIntent) -> IntentOutcome {
        tracing::debug!(intent = intent.name(), "handling user intent");
        match intent {
            UserIntent::SwitchSection { section } => {
                self.switch_section(section);
                IntentOutcome::Navigated
            }
            UserIntent::ShowTab { tab } => {
                self.show_tab(tab);
                IntentOutcome::Navigated
            }
            UserIntent::SubmitBooking => IntentOutcome::Submitted(self.submit_booking()),
            UserIntent::CancelBooking { booking_id } => {
                IntentOutcome::Cancellation(self.request_cancellation(booking_id))
            }
            UserIntent::ResolveCancellation { affirmed } => {
                IntentOutcome::Cancellation(self.resolve_pending(affirmed))
            }
        }
    }

    pub fn switch_section(&mut self, section: Section) {
        self.navigation.switch_section(section, &mut self.view);
    }

    pub fn show_tab(&mut self, tab: TripStatus) {
        self.navigation.show_tab(tab, &mut self.view);
    }

    /// Full rebuild of the trip lists; the previous cancel buttons are gone afterwards.
    pub fn render(&mut self) {
        self.cancel_bindings = render_all(&self.store, &mut self.view);
    }

    pub fn submit_booking(&mut self) -> BookingId {
        let trip = TripDetails {
            pickup_location: self.field(fields::PICKUP_LOCATION),
            dropoff_location: self.field(fields::DROPOFF_LOCATION),
            trip_date: self.field(fields::TRIP_DATE),
            trip_time: self.field(fields::TRIP_TIME),
            vehicle_type: self.field(fields::VEHICLE_TYPE),
            guest_name: self.field(fields::GUEST_NAME),
        };

        let id = self.fresh_id();
        self.store.add(BookingRecord::upcoming(id, trip));
        self.render();

        tracing::info!(booking_id = id.0, reference = %id.reference(), "booking submitted");
        self.notifier.notify(&submitted_message(id.reference()));
        self.form.reset();

        self.switch_section(Section::Bookings);
        self.show_tab(TripStatus::Upcoming);
        id
    }

    pub fn request_cancellation(&mut self, booking_id: BookingId) -> CancelOutcome {
        if let Some(pending) = self.pending {
            tracing::warn!(
                booking_id = booking_id.0,
                pending = pending.booking_id.0,
                "cancel ignored while another cancellation awaits confirmation"
            );
            return CancelOutcome::Busy;
        }
        if !self.cancel_bindings.contains(booking_id) {
            tracing::warn!(booking_id = booking_id.0, "no cancel button bound for booking");
            return CancelOutcome::NotBound;
        }

        match self.notifier.confirm(CANCEL_PROMPT) {
            Decision::Affirmed => self.finish_cancellation(booking_id),
            Decision::Declined => {
                tracing::debug!(booking_id = booking_id.0, "cancellation declined");
                CancelOutcome::Declined
            }
            Decision::Deferred => {
                let pending = PendingCancellation {
                    booking_id,
                    reference: booking_id.reference(),
                };
                self.pending = Some(pending);
                CancelOutcome::AwaitingDecision(pending)
            }
        }
    }

    pub fn resolve_pending(&mut self, affirmed: bool) -> CancelOutcome {
        let Some(pending) = self.pending.take() else {
            return CancelOutcome::NothingPending;
        };
        if affirmed {
            self.finish_cancellation(pending.booking_id)
        } else {
            tracing::debug!(booking_id = pending.booking_id.0, "cancellation declined");
            CancelOutcome::Declined
        }
    }

    pub fn show_map(&self, surface: &mut impl MapSurface) {
        surface.show_static_map(&self.map);
    }

    fn finish_cancellation(&mut self, booking_id: BookingId) -> CancelOutcome {
        let Some(record) = self.store.remove(booking_id) else {
            return CancelOutcome::AlreadyGone;
        };
        tracing::info!(booking_id = booking_id.0, "booking cancelled");
        self.notifier.notify(&cancelled_message(record.reference()));
        self.render();
        CancelOutcome::Cancelled(record)
    }

    fn field(&self, name: &str) -> String {
        self.form.read_field(name).unwrap_or_default()
    }

    fn fresh_id(&mut self) -> BookingId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.store.contains(id) {
                return id;
            }
            tracing::warn!(booking_id = id.0, "id source returned an id already in use");
        }
        // The source is stuck; step past the largest id in the store.
        let id = self
            .store
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(BookingId(1), |max| BookingId(max.0 + 1));
        tracing::warn!(booking_id = id.0, "id source exhausted; using next free id");
        id
    }
}

impl<V, N, F> Dashboard<V, N, F> {
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn cancel_bindings(&self) -> &CancelBindings {
        &self.cancel_bindings
    }

    pub fn pending(&self) -> Option<PendingCancellation> {
        self.pending
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }
}

#[cfg(test)]
#[path = "tests/binder_tests.rs"]
mod tests;
