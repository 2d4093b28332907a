//! Id allocation for newly submitted bookings.

use chrono::Utc;
use shared::domain::BookingId;

/// Supplies ids for new bookings. Successive calls must return distinct ids.
pub trait IdSource: Send {
    fn next_id(&mut self) -> BookingId;
}

/// Millisecond timestamps, bumped by one whenever the clock has not moved past
/// the last issued id so two submissions in the same tick still differ.
pub struct WallClockIds {
    clock: Box<dyn FnMut() -> i64 + Send>,
    last: Option<i64>,
}

impl WallClockIds {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    pub fn with_clock(clock: impl FnMut() -> i64 + Send + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }
}

impl Default for WallClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for WallClockIds {
    fn next_id(&mut self) -> BookingId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        BookingId(id)
    }
}

#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> BookingId {
        let id = BookingId(self.next);
        self.next += 1;
        id
    }
}
