use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(BookingId);

/// Ids are divided by this to get the short number shown to guests.
pub const REFERENCE_DIVISOR: i64 = 100_000;

impl BookingId {
    pub fn reference(self) -> TripReference {
        TripReference(self.0.div_euclid(REFERENCE_DIVISOR))
    }
}

/// Human-facing trip number, rendered as `TRP-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripReference(pub i64);

impl fmt::Display for TripReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRP-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Ongoing,
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub icon: &'static str,
}

impl TripStatus {
    /// Segment order on the bookings screen.
    pub const ALL: [TripStatus; 3] = [Self::Ongoing, Self::Upcoming, Self::Completed];

    pub fn key(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }

    pub fn badge(self) -> StatusBadge {
        match self {
            Self::Ongoing => StatusBadge {
                label: "On Trip",
                icon: "fa-truck",
            },
            Self::Completed => StatusBadge {
                label: "Completed",
                icon: "fa-check-circle",
            },
            Self::Upcoming => StatusBadge {
                label: "Awaiting Dispatch",
                icon: "fa-hourglass-half",
            },
        }
    }

    pub fn empty_icon(self) -> &'static str {
        match self {
            Self::Ongoing => "fa-circle-notch",
            Self::Upcoming => "fa-calendar-alt",
            Self::Completed => "fa-history",
        }
    }

    pub fn is_cancellable(self) -> bool {
        self != Self::Completed
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TripStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}

/// Top-level dashboard areas, one visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Bookings,
    NewBooking,
    LiveTracking,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Bookings, Self::NewBooking, Self::LiveTracking];

    pub fn key(self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::NewBooking => "new-booking",
            Self::LiveTracking => "live-tracking",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Bookings => "My Bookings",
            Self::NewBooking => "Book a Trip",
            Self::LiveTracking => "Live Tracking",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DashboardError::UnknownSection(s.to_string()))
    }
}

/// Free-text trip fields as entered on the booking form. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub trip_date: String,
    pub trip_time: String,
    pub vehicle_type: String,
    pub guest_name: String,
}

impl TripDetails {
    pub fn route(&self) -> String {
        format!("{} → {}", self.pickup_location, self.dropoff_location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub status: TripStatus,
    #[serde(flatten)]
    pub trip: TripDetails,
}

impl BookingRecord {
    pub fn new(id: BookingId, status: TripStatus, trip: TripDetails) -> Self {
        Self { id, status, trip }
    }

    /// Freshly submitted bookings always start out awaiting dispatch.
    pub fn upcoming(id: BookingId, trip: TripDetails) -> Self {
        Self::new(id, TripStatus::Upcoming, trip)
    }

    pub fn reference(&self) -> TripReference {
        self.id.reference()
    }
}
