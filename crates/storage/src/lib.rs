//! In-memory booking collection for one dashboard session.

pub mod ids;

use serde::{Deserialize, Serialize};
use shared::domain::{BookingId, BookingRecord, TripDetails, TripStatus};

pub use ids::{IdSource, SequentialIds, WallClockIds};

/// Ordered booking records. Insertion order is preserved and never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingStore {
    records: Vec<BookingRecord>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        for record in demo_records() {
            store.add(record);
        }
        store
    }

    /// Appends without looking at the field contents.
    pub fn add(&mut self, record: BookingRecord) {
        tracing::debug!(
            booking_id = record.id.0,
            status = %record.status,
            "booking added"
        );
        self.records.push(record);
    }

    /// Removes the first record with `id`. An unknown id leaves the store untouched.
    pub fn remove(&mut self, id: BookingId) -> Option<BookingRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let removed = self.records.remove(index);
        tracing::debug!(booking_id = id.0, remaining = self.records.len(), "booking removed");
        Some(removed)
    }

    pub fn query(&self, status: TripStatus) -> Vec<&BookingRecord> {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .collect()
    }

    pub fn count(&self, status: TripStatus) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }

    pub fn get(&self, id: BookingId) -> Option<&BookingRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: BookingId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub const DEMO_ONGOING_ID: BookingId = BookingId(999_991);
pub const DEMO_COMPLETED_ID: BookingId = BookingId(999_992);

pub fn demo_records() -> [BookingRecord; 2] {
    [
        BookingRecord::new(
            DEMO_ONGOING_ID,
            TripStatus::Ongoing,
            TripDetails {
                pickup_location: "Office Tower A".into(),
                dropoff_location: "Downtown Hotel".into(),
                trip_date: "2025-10-05".into(),
                trip_time: "10:00".into(),
                vehicle_type: "Sedan (4 Seater)".into(),
                guest_name: "John Smith".into(),
            },
        ),
        BookingRecord::new(
            DEMO_COMPLETED_ID,
            TripStatus::Completed,
            TripDetails {
                pickup_location: "Airport T3".into(),
                dropoff_location: "Office Tower B".into(),
                trip_date: "2025-10-04".into(),
                trip_time: "18:30".into(),
                vehicle_type: "SUV (6 Seater)".into(),
                guest_name: "Alice Johnson".into(),
            },
        ),
    ]
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
