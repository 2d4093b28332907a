//! Plain-text painting of the in-memory view.

use std::fmt::Write as _;

use dashboard_core::{
    collaborators::fields, ElementRef, FormDraft, FormInput, ItemView, MemoryView, SegmentView,
};
use shared::domain::{Section, TripStatus};

pub fn nav_bar(view: &MemoryView) -> String {
    Section::ALL
        .into_iter()
        .map(|section| {
            if view.is_active(ElementRef::NavLink(section)) {
                format!("[{}]", section.title())
            } else {
                format!(" {} ", section.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn tab_bar(view: &MemoryView) -> String {
    TripStatus::ALL
        .into_iter()
        .map(|tab| {
            if view.is_active(ElementRef::TabButton(tab)) {
                format!("<{}>", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn item_lines(item: &ItemView) -> Vec<String> {
    let mut lines = vec![
        format!(
            "#{}  [{}] {}  (id {})",
            item.reference, item.badge.icon, item.badge.label, item.booking_id
        ),
        format!("    Date:    {}", item.trip_date),
        format!("    Time:    {}", item.trip_time),
        format!("    Route:   {}", item.route),
        format!("    Vehicle: {}", item.vehicle_type),
    ];
    if item.cancellable {
        lines.push(format!("    (cancel {} to cancel this trip)", item.booking_id));
    }
    lines
}

pub fn segment_text(segment: &SegmentView) -> String {
    match segment {
        SegmentView::Empty(placeholder) => format!("[{}] {}\n", placeholder.icon, placeholder.label),
        SegmentView::Items(items) => {
            let mut out = String::new();
            for item in items {
                for line in item_lines(item) {
                    let _ = writeln!(out, "{line}");
                }
            }
            out
        }
    }
}

pub fn form_text(form: &FormDraft) -> String {
    let mut out = String::new();
    for (name, label) in fields::ALL {
        let value = form.read_field(name).unwrap_or_default();
        let _ = writeln!(out, "  {label:<18} {value}");
    }
    if form.is_blank() {
        let _ = writeln!(out, "  (form is empty)");
    }
    out
}

/// Whole screen for whichever section is active.
pub fn screen(view: &MemoryView, form: &FormDraft) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", nav_bar(view));
    let _ = writeln!(out, "{}", "-".repeat(60));

    match view.active_section() {
        Some(Section::Bookings) => {
            let _ = writeln!(out, "{}", tab_bar(view));
            if let Some(tab) = view.visible_tab() {
                match view.content(tab) {
                    Some(segment) => out.push_str(&segment_text(segment)),
                    None => {
                        let _ = writeln!(out, "(nothing rendered)");
                    }
                }
            }
        }
        Some(Section::NewBooking) => {
            let _ = writeln!(out, "New booking (type `book` to fill and submit):");
            out.push_str(&form_text(form));
        }
        Some(Section::LiveTracking) => {
            let _ = writeln!(out, "Live tracking map (type `map` to redraw).");
        }
        None => {
            let _ = writeln!(out, "(no active section)");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use dashboard_core::render::render_segment;
    use shared::domain::{BookingId, BookingRecord, TripDetails};

    use super::*;

    #[test]
    fn completed_items_print_without_cancel_hint() {
        let record = BookingRecord::new(
            BookingId(999_992),
            TripStatus::Completed,
            TripDetails {
                pickup_location: "Airport T3".into(),
                dropoff_location: "Office Tower B".into(),
                ..TripDetails::default()
            },
        );
        let text = segment_text(&render_segment(TripStatus::Completed, &[&record]));
        assert!(text.contains("#TRP-9"));
        assert!(text.contains("Airport T3 → Office Tower B"));
        assert!(!text.contains("to cancel this trip"));
    }

    #[test]
    fn empty_segment_prints_placeholder() {
        let text = segment_text(&render_segment(TripStatus::Ongoing, &[]));
        assert_eq!(text, "[fa-circle-notch] No Ongoing trips found.\n");
    }

    #[test]
    fn blank_form_is_flagged() {
        let mut form = FormDraft::new();
        assert!(form_text(&form).contains("(form is empty)"));

        form.set(fields::PICKUP_LOCATION, "Connaught Place");
        let text = form_text(&form);
        assert!(!text.contains("(form is empty)"));
        assert!(text.contains("Connaught Place"));
    }

    #[test]
    fn bars_mark_the_active_entries() {
        let mut view = MemoryView::default();
        let mut nav = dashboard_core::navigation::Navigation::default();
        nav.apply(&mut view);
        assert!(nav_bar(&view).starts_with("[My Bookings]"));
        assert!(tab_bar(&view).starts_with("<Ongoing>"));
    }
}
