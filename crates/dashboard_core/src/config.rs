use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::{
    domain::{Section, TripStatus},
    error::DashboardError,
};
use storage::BookingStore;

pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapMarker {
    pub position: GeoPoint,
    pub title: String,
    pub color: String,
}

impl Default for MapMarker {
    fn default() -> Self {
        Self {
            position: GeoPoint {
                lat: 28.625,
                lng: 77.218,
            },
            title: "Live Cab: FLT-456".into(),
            color: "#dc3545".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub center: GeoPoint,
    pub zoom: u8,
    pub marker: MapMarker,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: GeoPoint {
                lat: 28.6139,
                lng: 77.2090,
            },
            zoom: 12,
            marker: MapMarker::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seed_demo_data: bool,
    pub default_section: Section,
    pub default_tab: TripStatus,
    pub map: MapSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_section: Section::Bookings,
            default_tab: TripStatus::Ongoing,
            map: MapSettings::default(),
        }
    }
}

impl Settings {
    pub fn initial_store(&self) -> BookingStore {
        if self.seed_demo_data {
            BookingStore::with_demo_data()
        } else {
            BookingStore::new()
        }
    }
}

/// On-disk shape. Section and tab stay strings so bad names surface as
/// `DashboardError` instead of a serde message.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    seed_demo_data: Option<bool>,
    default_section: Option<String>,
    default_tab: Option<String>,
    map: Option<MapSettings>,
}

/// Defaults, then the TOML file, then environment overrides.
///
/// An explicit `path` must exist; the implicit `dashboard.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_settings_with_env(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    match fs::read_to_string(&file) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", file.display()))?;
            apply_file_settings(&mut settings, file_cfg)?;
            tracing::debug!(path = %file.display(), "loaded dashboard settings");
        }
        Err(err) if required => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", file.display()));
        }
        Err(_) => {}
    }

    apply_env_overrides(&mut settings, lookup)?;
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) -> Result<(), DashboardError> {
    if let Some(v) = file_cfg.seed_demo_data {
        settings.seed_demo_data = v;
    }
    if let Some(v) = file_cfg.default_section {
        settings.default_section = v.parse()?;
    }
    if let Some(v) = file_cfg.default_tab {
        settings.default_tab = v.parse()?;
    }
    if let Some(v) = file_cfg.map {
        settings.map = v;
    }
    Ok(())
}

/// `APP__*` names win over `FLEETPRO_*` when both are set.
pub fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), DashboardError> {
    let read = |short: &str| {
        lookup(&format!("APP__{short}"))
            .or_else(|| lookup(&format!("FLEETPRO_{short}")))
            .filter(|value| !value.trim().is_empty())
    };

    if let Some(v) = read("SEED_DEMO") {
        settings.seed_demo_data = parse_flag(&v)
            .ok_or_else(|| DashboardError::config(format!("SEED_DEMO must be a boolean, got `{v}`")))?;
    }
    if let Some(v) = read("DEFAULT_SECTION") {
        settings.default_section = v.parse()?;
    }
    if let Some(v) = read("DEFAULT_TAB") {
        settings.default_tab = v.parse()?;
    }
    Ok(())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
