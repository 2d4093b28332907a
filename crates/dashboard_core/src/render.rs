//! Store-to-view projection. Each call rebuilds all three trip lists.

use shared::domain::{BookingId, BookingRecord, StatusBadge, TripStatus};
use storage::BookingStore;

use crate::collaborators::{ElementRef, ViewBinding};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub booking_id: BookingId,
    pub reference: String,
    pub status: TripStatus,
    pub badge: StatusBadge,
    pub trip_date: String,
    pub trip_time: String,
    pub route: String,
    pub vehicle_type: String,
    pub cancellable: bool,
}

impl ItemView {
    pub fn from_record(record: &BookingRecord) -> Self {
        Self {
            booking_id: record.id,
            reference: record.reference().to_string(),
            status: record.status,
            badge: record.status.badge(),
            trip_date: record.trip.trip_date.clone(),
            trip_time: record.trip.trip_time.clone(),
            route: record.trip.route(),
            vehicle_type: record.trip.vehicle_type.clone(),
            cancellable: record.status.is_cancellable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPlaceholder {
    pub icon: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentView {
    Empty(EmptyPlaceholder),
    Items(Vec<ItemView>),
}

impl SegmentView {
    pub fn items(&self) -> &[ItemView] {
        match self {
            Self::Empty(_) => &[],
            Self::Items(items) => items,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items().len()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

pub fn render_segment(status: TripStatus, records: &[&BookingRecord]) -> SegmentView {
    if records.is_empty() {
        return SegmentView::Empty(EmptyPlaceholder {
            icon: status.empty_icon(),
            label: format!("No {} trips found.", status.title()),
        });
    }
    SegmentView::Items(records.iter().map(|record| ItemView::from_record(record)).collect())
}

/// Booking ids that currently have a live cancel button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelBindings(Vec<BookingId>);

impl CancelBindings {
    pub fn contains(&self, id: BookingId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = BookingId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn render_all(store: &BookingStore, view: &mut impl ViewBinding) -> CancelBindings {
    let mut bindings = Vec::new();
    for status in TripStatus::ALL {
        let segment = render_segment(status, &store.query(status));
        bindings.extend(
            segment
                .items()
                .iter()
                .filter(|item| item.cancellable)
                .map(|item| item.booking_id),
        );
        view.set_content(ElementRef::List(status), segment);
    }
    tracing::debug!(
        records = store.len(),
        cancel_buttons = bindings.len(),
        "rendered booking lists"
    );
    CancelBindings(bindings)
}
