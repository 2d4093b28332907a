use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use dashboard_core::{load_settings, Collaborators, Dashboard, FormDraft, MemoryView};
use eframe::egui;
use storage::WallClockIds;

mod controller;
mod ui;

use controller::events::{GuiNotifier, UiEvent};
use ui::DashboardApp;

#[derive(Parser, Debug)]
#[command(name = "fleetpro-desktop", about = "Trip booking dashboard")]
struct Args {
    /// Settings file; defaults to ./dashboard.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with an empty booking list.
    #[arg(long)]
    no_seed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.no_seed {
        settings.seed_demo_data = false;
    }

    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let dashboard = Dashboard::start(
        settings.initial_store(),
        Box::new(WallClockIds::new()),
        Collaborators {
            view: MemoryView::default(),
            notifier: GuiNotifier::new(ui_tx),
            form: FormDraft::new(),
        },
        &settings,
    )
    .context("dashboard layout is incomplete")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FleetPro Dashboard")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FleetPro Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dashboard, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with an error: {err}"))
}
