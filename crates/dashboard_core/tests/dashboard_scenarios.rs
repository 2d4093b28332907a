use std::collections::VecDeque;

use dashboard_core::{
    collaborators::fields, CancelOutcome, Collaborators, Dashboard, Decision, ElementRef,
    FormDraft, FormInput, MemoryView, Notifier, SegmentView, Settings, CANCEL_PROMPT,
};
use shared::domain::{BookingId, Section, TripStatus};
use storage::{BookingStore, SequentialIds, WallClockIds, DEMO_COMPLETED_ID, DEMO_ONGOING_ID};

#[derive(Default)]
struct RecordingNotifier {
    answers: VecDeque<bool>,
    notices: Vec<String>,
    prompts: Vec<String>,
}

impl RecordingNotifier {
    fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> Decision {
        self.prompts.push(message.to_string());
        Decision::from(self.answers.pop_front().unwrap_or(false))
    }
}

fn seeded(notifier: RecordingNotifier) -> Dashboard<MemoryView, RecordingNotifier, FormDraft> {
    Dashboard::start(
        BookingStore::with_demo_data(),
        Box::new(WallClockIds::new()),
        Collaborators {
            view: MemoryView::default(),
            notifier,
            form: FormDraft::new(),
        },
        &Settings::default(),
    )
    .expect("dashboard starts")
}

fn segment(view: &MemoryView, status: TripStatus) -> &SegmentView {
    view.content(status).expect("segment rendered")
}

#[test]
fn seeded_dashboard_renders_each_segment() {
    let dashboard = seeded(RecordingNotifier::default());
    let view = dashboard.view();

    let ongoing = segment(view, TripStatus::Ongoing).items();
    assert_eq!(ongoing.len(), 1);
    assert_eq!(ongoing[0].reference, "TRP-9");
    assert_eq!(ongoing[0].badge.label, "On Trip");
    assert_eq!(ongoing[0].route, "Office Tower A → Downtown Hotel");
    assert!(ongoing[0].cancellable);

    let completed = segment(view, TripStatus::Completed).items();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].reference, "TRP-9");
    assert_eq!(completed[0].badge.label, "Completed");
    assert!(!completed[0].cancellable);

    match segment(view, TripStatus::Upcoming) {
        SegmentView::Empty(placeholder) => {
            assert_eq!(placeholder.label, "No Upcoming trips found.");
            assert_eq!(placeholder.icon, "fa-calendar-alt");
        }
        other => panic!("expected empty placeholder, got {other:?}"),
    }
}

#[test]
fn submitting_the_form_adds_an_upcoming_trip() {
    let mut dashboard = seeded(RecordingNotifier::default());
    dashboard.switch_section(Section::NewBooking);
    {
        let form = dashboard.form_mut();
        form.set(fields::PICKUP_LOCATION, "A");
        form.set(fields::DROPOFF_LOCATION, "B");
        form.set(fields::TRIP_DATE, "2025-01-01");
        form.set(fields::TRIP_TIME, "09:00");
        form.set(fields::VEHICLE_TYPE, "Sedan");
        form.set(fields::GUEST_NAME, "X");
    }

    let id = dashboard.submit_booking();

    let store = dashboard.store();
    assert_eq!(store.len(), 3);
    let last = store.iter().last().expect("appended");
    assert_eq!(last.id, id);
    assert_eq!(last.status, TripStatus::Upcoming);
    assert_eq!(last.trip.guest_name, "X");

    assert_eq!(
        dashboard.notifier().notices,
        vec![format!(
            "✅ Booking successfully submitted! Tracking reference: #{}",
            id.reference()
        )]
    );
    assert_eq!(dashboard.form().read_field(fields::PICKUP_LOCATION), None);

    let view = dashboard.view();
    assert_eq!(view.active_section(), Some(Section::Bookings));
    assert_eq!(view.visible_tab(), Some(TripStatus::Upcoming));
    assert!(view.is_active(ElementRef::TabButton(TripStatus::Upcoming)));

    let upcoming = segment(view, TripStatus::Upcoming).items();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].route, "A → B");
    assert_eq!(upcoming[0].badge.label, "Awaiting Dispatch");
    assert_eq!(upcoming[0].trip_date, "2025-01-01");
    assert_eq!(upcoming[0].trip_time, "09:00");
    assert_eq!(upcoming[0].vehicle_type, "Sedan");
}

#[test]
fn affirmed_cancellation_removes_the_trip() {
    let mut dashboard = seeded(RecordingNotifier::answering(&[true]));

    let outcome = dashboard.request_cancellation(DEMO_ONGOING_ID);
    assert!(matches!(outcome, CancelOutcome::Cancelled(_)));

    assert!(!dashboard.store().contains(DEMO_ONGOING_ID));
    assert_eq!(dashboard.store().len(), 1);
    assert_eq!(dashboard.notifier().prompts, vec![CANCEL_PROMPT.to_string()]);
    assert_eq!(
        dashboard.notifier().notices,
        vec!["Booking #TRP-9 has been cancelled.".to_string()]
    );
    assert!(segment(dashboard.view(), TripStatus::Ongoing).is_placeholder());
}

#[test]
fn declined_cancellation_changes_nothing() {
    let mut dashboard = seeded(RecordingNotifier::answering(&[false]));
    let store_before = dashboard.store().clone();
    let view_before = dashboard.view().clone();

    assert_eq!(
        dashboard.request_cancellation(DEMO_ONGOING_ID),
        CancelOutcome::Declined
    );
    assert_eq!(dashboard.store(), &store_before);
    assert_eq!(dashboard.view(), &view_before);
    assert!(dashboard.notifier().notices.is_empty());
}

#[test]
fn rendered_counts_match_queries_after_every_mutation() {
    let mut dashboard: Dashboard<MemoryView, RecordingNotifier, FormDraft> = Dashboard::start(
        BookingStore::with_demo_data(),
        Box::new(SequentialIds::starting_at(2_000_000)),
        Collaborators {
            view: MemoryView::default(),
            notifier: RecordingNotifier::answering(&[true, false, true]),
            form: FormDraft::new(),
        },
        &Settings::default(),
    )
    .expect("dashboard starts");

    let assert_synced = |dashboard: &Dashboard<MemoryView, RecordingNotifier, FormDraft>| {
        for status in TripStatus::ALL {
            assert_eq!(
                segment(dashboard.view(), status).item_count(),
                dashboard.store().query(status).len(),
                "segment {status} out of sync"
            );
        }
    };

    assert_synced(&dashboard);
    let first = dashboard.submit_booking();
    assert_synced(&dashboard);
    let second = dashboard.submit_booking();
    assert_synced(&dashboard);
    dashboard.request_cancellation(first);
    assert_synced(&dashboard);
    dashboard.request_cancellation(second);
    assert_synced(&dashboard);
    dashboard.request_cancellation(DEMO_ONGOING_ID);
    assert_synced(&dashboard);

    let upcoming: Vec<BookingId> = dashboard
        .store()
        .query(TripStatus::Upcoming)
        .iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(upcoming, vec![second]);
    assert!(dashboard.store().contains(DEMO_COMPLETED_ID));
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut dashboard = seeded(RecordingNotifier::default());
    dashboard.render();
    let first = dashboard.view().clone();
    dashboard.render();
    assert_eq!(dashboard.view(), &first);
}

#[test]
fn tab_and_section_navigation_never_touch_bookings() {
    let mut dashboard = seeded(RecordingNotifier::default());
    let store_before = dashboard.store().clone();

    for section in Section::ALL {
        dashboard.switch_section(section);
        for tab in TripStatus::ALL {
            dashboard.show_tab(tab);
            assert_eq!(dashboard.view().active_section(), Some(section));
            assert_eq!(dashboard.view().visible_tab(), Some(tab));
        }
    }
    assert_eq!(dashboard.store(), &store_before);
}
