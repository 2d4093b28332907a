//! Static live-tracking map: a tinted canvas with one vehicle marker.

use dashboard_core::{config::GeoPoint, MapSettings, MapSurface};
use eframe::egui;

const WATER: egui::Color32 = egui::Color32::from_rgb(0xd1, 0xe0, 0xeb);
const ROAD: egui::Color32 = egui::Color32::WHITE;
const LABEL: egui::Color32 = egui::Color32::from_rgb(0x80, 0x80, 0x80);

#[derive(Default)]
pub struct MapCanvas {
    settings: Option<MapSettings>,
}

impl MapSurface for MapCanvas {
    fn show_static_map(&mut self, map: &MapSettings) {
        self.settings = Some(map.clone());
    }
}

/// Pixels per degree at a web-map zoom level.
fn pixels_per_degree(zoom: u8) -> f32 {
    256.0 * 2f32.powi(i32::from(zoom)) / 360.0
}

pub fn project(center: GeoPoint, point: GeoPoint, zoom: u8, canvas: egui::Rect) -> egui::Pos2 {
    let scale = pixels_per_degree(zoom);
    let dx = (point.lng - center.lng) as f32 * scale;
    let dy = (center.lat - point.lat) as f32 * scale;
    canvas.center() + egui::vec2(dx, dy)
}

fn parse_hex_color(raw: &str) -> Option<egui::Color32> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(egui::Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl MapCanvas {
    pub fn paint(&self, ui: &mut egui::Ui) {
        let Some(map) = &self.settings else {
            ui.label("Map unavailable.");
            return;
        };

        let size = egui::vec2(ui.available_width().max(320.0), 360.0);
        let (canvas, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter().with_clip_rect(canvas);

        painter.rect_filled(canvas, egui::CornerRadius::same(6), WATER);
        for offset in [-0.25f32, 0.0, 0.25] {
            let y = canvas.center().y + offset * canvas.height();
            painter.line_segment(
                [egui::pos2(canvas.left(), y), egui::pos2(canvas.right(), y)],
                egui::Stroke::new(6.0, ROAD),
            );
            let x = canvas.center().x + offset * canvas.width();
            painter.line_segment(
                [egui::pos2(x, canvas.top()), egui::pos2(x, canvas.bottom())],
                egui::Stroke::new(6.0, ROAD),
            );
        }

        let marker_color =
            parse_hex_color(&map.marker.color).unwrap_or(egui::Color32::from_rgb(0xdc, 0x35, 0x45));
        let marker = project(map.center, map.marker.position, map.zoom, canvas);
        painter.circle_filled(marker, 8.0, marker_color);
        painter.text(
            marker - egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_BOTTOM,
            &map.marker.title,
            egui::FontId::proportional(13.0),
            LABEL,
        );
        painter.text(
            canvas.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!(
                "{:.4}, {:.4} · zoom {}",
                map.center.lat, map.center.lng, map.zoom
            ),
            egui::FontId::proportional(11.0),
            LABEL,
        );
    }
}
