use shared::domain::{Section, TripStatus};

use crate::collaborators::{ElementRef, ViewBinding};

/// Which section and which trip tab are showing. Independent of the bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    section: Section,
    tab: TripStatus,
}

impl Navigation {
    pub fn new(section: Section, tab: TripStatus) -> Self {
        Self { section, tab }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn tab(&self) -> TripStatus {
        self.tab
    }

    pub fn switch_section(&mut self, section: Section, view: &mut impl ViewBinding) {
        for candidate in Section::ALL {
            let active = candidate == section;
            view.set_active(ElementRef::Section(candidate), active);
            view.set_active(ElementRef::NavLink(candidate), active);
        }
        self.section = section;
    }

    pub fn show_tab(&mut self, tab: TripStatus, view: &mut impl ViewBinding) {
        for candidate in TripStatus::ALL {
            let selected = candidate == tab;
            view.set_visible(ElementRef::TabContent(candidate), selected);
            view.set_active(ElementRef::TabButton(candidate), selected);
        }
        self.tab = tab;
    }

    /// Pushes the current state to a view that has never seen it.
    pub fn apply(&mut self, view: &mut impl ViewBinding) {
        self.switch_section(self.section, view);
        self.show_tab(self.tab, view);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(Section::Bookings, TripStatus::Ongoing)
    }
}
