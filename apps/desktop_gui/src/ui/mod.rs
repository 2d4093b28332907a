//! UI layer for the desktop dashboard: app shell and map canvas.

pub mod app;
pub mod map;

pub use app::DashboardApp;
