use std::collections::VecDeque;

use super::*;
use crate::memory::{FormDraft, MemoryView};
use storage::{IdSource, SequentialIds, DEMO_COMPLETED_ID, DEMO_ONGOING_ID};

struct ScriptedNotifier {
    answers: VecDeque<Decision>,
    notices: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedNotifier {
    fn answering(answers: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            notices: Vec::new(),
            prompts: Vec::new(),
        }
    }

    fn silent() -> Self {
        Self::answering([])
    }
}

impl Notifier for ScriptedNotifier {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> Decision {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(Decision::Declined)
    }
}

#[derive(Default)]
struct RecordingMap {
    shown: Vec<MapSettings>,
}

impl MapSurface for RecordingMap {
    fn show_static_map(&mut self, map: &MapSettings) {
        self.shown.push(map.clone());
    }
}

type TestDashboard = Dashboard<MemoryView, ScriptedNotifier, FormDraft>;

fn dashboard_with(notifier: ScriptedNotifier) -> TestDashboard {
    Dashboard::start(
        BookingStore::with_demo_data(),
        Box::new(SequentialIds::starting_at(1_700_000_000_000)),
        Collaborators {
            view: MemoryView::default(),
            notifier,
            form: FormDraft::new(),
        },
        &Settings::default(),
    )
    .expect("start")
}

#[test]
fn start_activates_default_section_and_tab() {
    let dashboard = dashboard_with(ScriptedNotifier::silent());
    assert_eq!(dashboard.view().active_section(), Some(Section::Bookings));
    assert_eq!(dashboard.view().visible_tab(), Some(TripStatus::Ongoing));
    assert!(dashboard
        .view()
        .is_active(ElementRef::TabButton(TripStatus::Ongoing)));
}

#[test]
fn start_honours_configured_defaults() {
    let settings = Settings {
        default_section: Section::LiveTracking,
        default_tab: TripStatus::Completed,
        ..Settings::default()
    };
    let dashboard: TestDashboard = Dashboard::start(
        BookingStore::new(),
        Box::new(SequentialIds::starting_at(1)),
        Collaborators {
            view: MemoryView::default(),
            notifier: ScriptedNotifier::silent(),
            form: FormDraft::new(),
        },
        &settings,
    )
    .expect("start");
    assert_eq!(dashboard.view().active_section(), Some(Section::LiveTracking));
    assert_eq!(dashboard.view().visible_tab(), Some(TripStatus::Completed));
}

#[test]
fn start_rejects_view_missing_a_list() {
    let result: Result<TestDashboard, _> = Dashboard::start(
        BookingStore::new(),
        Box::new(SequentialIds::starting_at(1)),
        Collaborators {
            view: MemoryView::without([ElementRef::List(TripStatus::Completed)]),
            notifier: ScriptedNotifier::silent(),
            form: FormDraft::new(),
        },
        &Settings::default(),
    );
    let err = result.err().expect("wiring error");
    assert_eq!(err, DashboardError::MissingElement("completed-list".into()));
    assert!(!err.is_configuration());
}

#[test]
fn missing_form_fields_become_empty_strings() {
    let mut dashboard = dashboard_with(ScriptedNotifier::silent());
    dashboard.form_mut().set(fields::GUEST_NAME, "Only Name");

    let id = dashboard.submit_booking();
    let record = dashboard.store().get(id).expect("stored");
    assert_eq!(record.trip.guest_name, "Only Name");
    assert_eq!(record.trip.pickup_location, "");
    assert_eq!(record.trip.route(), " → ");
    assert_eq!(record.status, TripStatus::Upcoming);
}

#[test]
fn submit_skips_ids_already_in_the_store() {
    let mut dashboard: TestDashboard = Dashboard::start(
        BookingStore::with_demo_data(),
        Box::new(SequentialIds::starting_at(DEMO_ONGOING_ID.0)),
        Collaborators {
            view: MemoryView::default(),
            notifier: ScriptedNotifier::silent(),
            form: FormDraft::new(),
        },
        &Settings::default(),
    )
    .expect("start");

    let id = dashboard.submit_booking();
    assert_ne!(id, DEMO_ONGOING_ID);
    assert_ne!(id, DEMO_COMPLETED_ID);
    assert_eq!(dashboard.store().len(), 3);
}

struct StuckIds(BookingId);

impl IdSource for StuckIds {
    fn next_id(&mut self) -> BookingId {
        self.0
    }
}

#[test]
fn submit_steps_past_a_stuck_id_source() {
    let mut dashboard: TestDashboard = Dashboard::start(
        BookingStore::with_demo_data(),
        Box::new(StuckIds(DEMO_ONGOING_ID)),
        Collaborators {
            view: MemoryView::default(),
            notifier: ScriptedNotifier::silent(),
            form: FormDraft::new(),
        },
        &Settings::default(),
    )
    .expect("start");

    let id = dashboard.submit_booking();
    assert_eq!(id, BookingId(DEMO_COMPLETED_ID.0 + 1));

    let next = dashboard.submit_booking();
    assert_eq!(next, BookingId(DEMO_COMPLETED_ID.0 + 2));
    assert_eq!(dashboard.store().len(), 4);
}

#[test]
fn completed_trips_cannot_be_cancelled() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Affirmed]));
    let outcome = dashboard.request_cancellation(DEMO_COMPLETED_ID);
    assert_eq!(outcome, CancelOutcome::NotBound);
    assert!(dashboard.notifier().prompts.is_empty());
    assert!(dashboard.store().contains(DEMO_COMPLETED_ID));
}

#[test]
fn unknown_id_is_not_bound() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Affirmed]));
    assert_eq!(
        dashboard.request_cancellation(BookingId(5)),
        CancelOutcome::NotBound
    );
    assert_eq!(dashboard.store().len(), 2);
}

#[test]
fn deferred_confirmation_waits_for_resolution() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Deferred]));

    let outcome = dashboard.request_cancellation(DEMO_ONGOING_ID);
    assert!(matches!(outcome, CancelOutcome::AwaitingDecision(_)));
    assert!(dashboard.store().contains(DEMO_ONGOING_ID));
    assert_eq!(
        dashboard.pending().map(|p| p.reference.to_string()),
        Some("TRP-9".to_string())
    );

    assert_eq!(
        dashboard.request_cancellation(DEMO_ONGOING_ID),
        CancelOutcome::Busy
    );

    let outcome = dashboard.resolve_pending(true);
    assert!(matches!(outcome, CancelOutcome::Cancelled(ref r) if r.id == DEMO_ONGOING_ID));
    assert!(!dashboard.store().contains(DEMO_ONGOING_ID));
    assert!(dashboard.pending().is_none());
    assert_eq!(
        dashboard.notifier().notices,
        vec!["Booking #TRP-9 has been cancelled.".to_string()]
    );
}

#[test]
fn deferred_decline_changes_nothing() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Deferred]));
    let view_before = dashboard.view().clone();

    dashboard.request_cancellation(DEMO_ONGOING_ID);
    assert_eq!(dashboard.resolve_pending(false), CancelOutcome::Declined);
    assert_eq!(dashboard.store().len(), 2);
    assert_eq!(dashboard.view(), &view_before);
    assert_eq!(dashboard.resolve_pending(true), CancelOutcome::NothingPending);
}

#[test]
fn cancel_bindings_follow_every_render() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Affirmed]));
    assert_eq!(dashboard.cancel_bindings().len(), 1);

    let id = dashboard.submit_booking();
    assert!(dashboard.cancel_bindings().contains(id));
    assert_eq!(dashboard.cancel_bindings().len(), 2);

    dashboard.request_cancellation(DEMO_ONGOING_ID);
    assert!(!dashboard.cancel_bindings().contains(DEMO_ONGOING_ID));
    assert_eq!(dashboard.cancel_bindings().len(), 1);
}

#[test]
fn handle_routes_intents() {
    let mut dashboard = dashboard_with(ScriptedNotifier::answering([Decision::Declined]));

    assert_eq!(
        dashboard.handle(UserIntent::SwitchSection {
            section: Section::NewBooking
        }),
        IntentOutcome::Navigated
    );
    assert_eq!(dashboard.view().active_section(), Some(Section::NewBooking));

    assert_eq!(
        dashboard.handle(UserIntent::CancelBooking {
            booking_id: DEMO_ONGOING_ID
        }),
        IntentOutcome::Cancellation(CancelOutcome::Declined)
    );
    assert_eq!(dashboard.notifier().prompts, vec![CANCEL_PROMPT.to_string()]);

    let outcome = dashboard.handle(UserIntent::SubmitBooking);
    assert!(matches!(outcome, IntentOutcome::Submitted(_)));
    assert_eq!(dashboard.navigation().section(), Section::Bookings);
    assert_eq!(dashboard.navigation().tab(), TripStatus::Upcoming);
}

#[test]
fn map_receives_configured_marker() {
    let dashboard = dashboard_with(ScriptedNotifier::silent());
    let mut map = RecordingMap::default();
    dashboard.show_map(&mut map);
    assert_eq!(map.shown.len(), 1);
    assert_eq!(map.shown[0].marker.title, "Live Cab: FLT-456");
    assert_eq!(map.shown[0].zoom, 12);
}
