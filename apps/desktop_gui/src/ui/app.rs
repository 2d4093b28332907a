use crossbeam_channel::Receiver;
use dashboard_core::{
    collaborators::fields, Dashboard, ElementRef, FormDraft, ItemView, MemoryView, SegmentView,
};
use eframe::egui;
use shared::{
    domain::{Section, TripStatus},
    protocol::UserIntent,
};

use crate::controller::{
    events::{GuiNotifier, UiEvent},
    orchestration::dispatch_intent,
};
use crate::ui::map::MapCanvas;

pub type GuiDashboard = Dashboard<MemoryView, GuiNotifier, FormDraft>;

const NOTICE_TTL_TICKS: u64 = 240;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x6f, 0xeb);

struct Notice {
    text: String,
    shown_at: u64,
}

pub struct DashboardApp {
    dashboard: GuiDashboard,
    ui_rx: Receiver<UiEvent>,
    map: MapCanvas,

    notices: Vec<Notice>,
    confirm_prompt: Option<String>,
    status: String,

    // Collected while drawing, dispatched once the frame's borrows end.
    queued: Vec<UserIntent>,
    tick: u64,
}

impl DashboardApp {
    pub fn new(dashboard: GuiDashboard, ui_rx: Receiver<UiEvent>) -> Self {
        let mut map = MapCanvas::default();
        dashboard.show_map(&mut map);
        Self {
            dashboard,
            ui_rx,
            map,
            notices: Vec::new(),
            confirm_prompt: None,
            status: String::new(),
            queued: Vec::new(),
            tick: 0,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Notice(text) => self.notices.push(Notice {
                    text,
                    shown_at: self.tick,
                }),
                UiEvent::ConfirmRequested(prompt) => self.confirm_prompt = Some(prompt),
            }
        }
        let tick = self.tick;
        self.notices
            .retain(|notice| tick.saturating_sub(notice.shown_at) < NOTICE_TTL_TICKS);
    }

    fn flush_intents(&mut self) {
        for intent in std::mem::take(&mut self.queued) {
            dispatch_intent(&mut self.dashboard, intent, &mut self.status);
        }
        // Drain anything the dispatched intents just raised.
        self.process_ui_events();
    }

    fn show_nav_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("FleetPro").color(ACCENT).strong());
            ui.add_space(16.0);
            for section in Section::ALL {
                let active = self.dashboard.view().is_active(ElementRef::NavLink(section));
                if ui.selectable_label(active, section.title()).clicked() && !active {
                    self.queued.push(UserIntent::SwitchSection { section });
                }
            }
        });
    }

    fn show_bookings(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in TripStatus::ALL {
                let active = self.dashboard.view().is_active(ElementRef::TabButton(tab));
                let count = self.dashboard.store().count(tab);
                let label = format!("{} ({count})", tab.title());
                if ui.selectable_label(active, label).clicked() && !active {
                    self.queued.push(UserIntent::ShowTab { tab });
                }
            }
        });
        ui.separator();

        let Some(tab) = self.dashboard.view().visible_tab() else {
            return;
        };
        let Some(segment) = self.dashboard.view().content(tab) else {
            return;
        };

        let mut cancel_clicks = Vec::new();
        egui::ScrollArea::vertical().show(ui, |ui| match segment {
            SegmentView::Empty(placeholder) => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&placeholder.label)
                            .color(ui.visuals().weak_text_color()),
                    );
                });
            }
            SegmentView::Items(items) => {
                for item in items {
                    if booking_card(ui, item) {
                        cancel_clicks.push(item.booking_id);
                    }
                    ui.add_space(6.0);
                }
            }
        });

        self.queued.extend(
            cancel_clicks
                .into_iter()
                .map(|booking_id| UserIntent::CancelBooking { booking_id }),
        );
    }

    fn show_booking_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Book a trip");
        ui.add_space(8.0);
        egui::Grid::new("booking_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let form = self.dashboard.form_mut();
                for (name, label) in fields::ALL {
                    ui.label(label);
                    ui.add(
                        egui::TextEdit::singleline(form.field_mut(name))
                            .desired_width(280.0)
                            .hint_text(label),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        if ui.button("Submit booking").clicked() {
            self.queued.push(UserIntent::SubmitBooking);
        }
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.confirm_prompt.clone() else {
            return;
        };
        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes, cancel trip").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Keep booking").clicked() {
                        answer = Some(false);
                    }
                });
            });
        if let Some(affirmed) = answer {
            self.confirm_prompt = None;
            self.queued.push(UserIntent::ResolveCancellation { affirmed });
        }
    }

    fn show_status_strip(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&self.status).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{} bookings", self.dashboard.store().len()))
                        .small(),
                );
            });
        });
        for notice in &self.notices {
            ui.label(egui::RichText::new(&notice.text).color(ACCENT));
        }
    }
}

/// Draws one trip card; returns true when its cancel button was clicked.
fn booking_card(ui: &mut egui::Ui, item: &ItemView) -> bool {
    let mut cancel_clicked = false;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("#{}", item.reference)).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(item.badge.label).color(badge_color(item.status)));
            });
        });
        egui::Grid::new(("booking_details", item.booking_id.0))
            .num_columns(2)
            .show(ui, |ui| {
                for (label, value) in [
                    ("Date:", &item.trip_date),
                    ("Time:", &item.trip_time),
                    ("Route:", &item.route),
                    ("Vehicle:", &item.vehicle_type),
                ] {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value.as_str());
                    ui.end_row();
                }
            });
        if item.cancellable && ui.button("Cancel Trip").clicked() {
            cancel_clicked = true;
        }
    });
    cancel_clicked
}

fn badge_color(status: TripStatus) -> egui::Color32 {
    match status {
        TripStatus::Ongoing => egui::Color32::from_rgb(0x19, 0x87, 0x54),
        TripStatus::Upcoming => egui::Color32::from_rgb(0xfd, 0x7e, 0x14),
        TripStatus::Completed => egui::Color32::from_rgb(0x6c, 0x75, 0x7d),
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick = self.tick.wrapping_add(1);
        self.process_ui_events();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| self.show_nav_bar(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.show_status_strip(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.dashboard.view().active_section() {
                Some(Section::Bookings) => self.show_bookings(ui),
                Some(Section::NewBooking) => self.show_booking_form(ui),
                Some(Section::LiveTracking) => self.map.paint(ui),
                None => {
                    ui.label("No section selected.");
                }
            }
        });
        self.show_confirm_dialog(ctx);

        self.flush_intents();

        if self.notices.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }
}
