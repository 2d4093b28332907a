//! Seams between the dashboard core and whatever front-end hosts it.

use std::fmt;

use shared::domain::{Section, TripStatus};

use crate::{config::MapSettings, render::SegmentView};

/// Addressable pieces of the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    Section(Section),
    NavLink(Section),
    TabContent(TripStatus),
    TabButton(TripStatus),
    List(TripStatus),
}

impl ElementRef {
    pub fn key(&self) -> String {
        match self {
            Self::Section(section) => section.key().to_string(),
            Self::NavLink(section) => format!("nav:{}", section.key()),
            Self::TabContent(tab) => tab.key().to_string(),
            Self::TabButton(tab) => format!("tab:{}", tab.key()),
            Self::List(status) => format!("{}-list", status.key()),
        }
    }

    /// Every element the dashboard expects the view to provide.
    pub fn required() -> Vec<ElementRef> {
        let mut elements = Vec::with_capacity(Section::ALL.len() * 2 + TripStatus::ALL.len() * 3);
        for section in Section::ALL {
            elements.push(Self::Section(section));
            elements.push(Self::NavLink(section));
        }
        for tab in TripStatus::ALL {
            elements.push(Self::TabContent(tab));
            elements.push(Self::TabButton(tab));
            elements.push(Self::List(tab));
        }
        elements
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

pub trait ViewBinding {
    fn has_element(&self, _element: ElementRef) -> bool {
        true
    }
    fn set_visible(&mut self, element: ElementRef, visible: bool);
    fn set_active(&mut self, element: ElementRef, active: bool);
    fn set_content(&mut self, element: ElementRef, content: SegmentView);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Affirmed,
    Declined,
    /// The answer arrives later through `Dashboard::resolve_pending`.
    Deferred,
}

impl From<bool> for Decision {
    fn from(affirmed: bool) -> Self {
        if affirmed {
            Self::Affirmed
        } else {
            Self::Declined
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> Decision;
}

pub trait FormInput {
    fn read_field(&self, name: &str) -> Option<String>;
    fn reset(&mut self);
}

pub trait MapSurface {
    fn show_static_map(&mut self, map: &MapSettings);
}

pub mod fields {
    pub const PICKUP_LOCATION: &str = "pickupLocation";
    pub const DROPOFF_LOCATION: &str = "dropoffLocation";
    pub const TRIP_DATE: &str = "tripDate";
    pub const TRIP_TIME: &str = "tripTime";
    pub const VEHICLE_TYPE: &str = "vehicleType";
    pub const GUEST_NAME: &str = "guestName";

    /// Form order, with the label shown next to each input.
    pub const ALL: [(&str, &str); 6] = [
        (PICKUP_LOCATION, "Pickup location"),
        (DROPOFF_LOCATION, "Drop-off location"),
        (TRIP_DATE, "Date"),
        (TRIP_TIME, "Time"),
        (VEHICLE_TYPE, "Vehicle"),
        (GUEST_NAME, "Guest name"),
    ];
}
