use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_core::{
    collaborators::fields, load_settings, Collaborators, Dashboard, FormDraft, MemoryView,
    Notifier,
};
use shared::{
    domain::{BookingId, Section, TripStatus},
    protocol::UserIntent,
};
use storage::WallClockIds;

mod terminal;
mod text_view;

use terminal::{ScriptNotifier, TerminalNotifier, TextMap};

#[derive(Parser, Debug)]
#[command(name = "fleetpro", about = "Trip booking dashboard for the terminal")]
struct Args {
    /// Settings file; defaults to ./dashboard.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with an empty booking list.
    #[arg(long)]
    no_seed: bool,
    /// Replay newline-delimited JSON intents instead of reading commands.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print the booking list as JSON after the session ends.
    #[arg(long)]
    dump_json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum ConsoleCommand {
    Intent(UserIntent),
    Book,
    Show,
    Map,
    Json,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  section <bookings|new-booking|live-tracking>
  tab <ongoing|upcoming|completed>
  book              fill in the booking form and submit it
  cancel <id>       cancel a trip by booking id
  show              redraw the current screen
  map               redraw the live tracking map
  json              print all bookings as JSON
  help | quit";

fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ConsoleCommand::Show);
    };
    let head = head.to_ascii_lowercase();
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(format!("`{head}` got an unexpected argument `{extra}`"));
    }

    let command = match (head.as_str(), arg) {
        ("section", Some(name)) => ConsoleCommand::Intent(UserIntent::SwitchSection {
            section: name.parse::<Section>().map_err(|err| err.to_string())?,
        }),
        ("tab", Some(name)) => ConsoleCommand::Intent(UserIntent::ShowTab {
            tab: name.parse::<TripStatus>().map_err(|err| err.to_string())?,
        }),
        ("cancel", Some(id)) => {
            let id = id
                .trim_start_matches('#')
                .parse::<i64>()
                .map_err(|_| format!("`{id}` is not a booking id"))?;
            ConsoleCommand::Intent(UserIntent::CancelBooking {
                booking_id: BookingId(id),
            })
        }
        ("section" | "tab" | "cancel", None) => {
            return Err(format!("`{head}` needs an argument (try `help`)"));
        }
        ("book", None) => ConsoleCommand::Book,
        ("show", None) | ("list", None) => ConsoleCommand::Show,
        ("map", None) => ConsoleCommand::Map,
        ("json", None) => ConsoleCommand::Json,
        ("help", _) | ("?", _) => ConsoleCommand::Help,
        ("quit", _) | ("exit", _) | ("q", _) => ConsoleCommand::Quit,
        ("book" | "show" | "list" | "map" | "json", Some(extra)) => {
            return Err(format!("`{head}` takes no argument, got `{extra}`"));
        }
        (other, _) => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(command)
}

fn prompt_line(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_screen<N>(dashboard: &Dashboard<MemoryView, N, FormDraft>) {
    println!("{}", text_view::screen(dashboard.view(), dashboard.form()));
}

fn print_json<N>(dashboard: &Dashboard<MemoryView, N, FormDraft>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(dashboard.store()).context("failed to encode bookings")?
    );
    Ok(())
}

fn run_interactive(dashboard: &mut Dashboard<MemoryView, TerminalNotifier, FormDraft>) -> Result<()> {
    println!("{HELP}\n");
    print_screen(dashboard);

    loop {
        let Some(line) = prompt_line("fleetpro")? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            ConsoleCommand::Intent(intent) => {
                dashboard.handle(intent);
            }
            ConsoleCommand::Book => {
                dashboard.switch_section(Section::NewBooking);
                for (name, label) in fields::ALL {
                    let Some(value) = prompt_line(label)? else {
                        return Ok(());
                    };
                    dashboard.form_mut().set(name, value);
                }
                dashboard.submit_booking();
            }
            ConsoleCommand::Show => {}
            ConsoleCommand::Map => {
                dashboard.show_map(&mut TextMap);
                continue;
            }
            ConsoleCommand::Json => {
                print_json(dashboard)?;
                continue;
            }
            ConsoleCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ConsoleCommand::Quit => break,
        }
        print_screen(dashboard);
    }
    Ok(())
}

fn run_script<N: Notifier>(
    dashboard: &mut Dashboard<MemoryView, N, FormDraft>,
    script: &str,
) -> Result<()> {
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let intent: UserIntent = serde_json::from_str(line)
            .with_context(|| format!("invalid intent on script line {}", index + 1))?;
        let outcome = dashboard.handle(intent);
        tracing::info!(line = index + 1, ?outcome, "script step");
    }
    print_screen(dashboard);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.no_seed {
        settings.seed_demo_data = false;
    }
    let store = settings.initial_store();

    match &args.script {
        Some(path) => {
            let script = fs::read_to_string(path)
                .with_context(|| format!("failed to read script '{}'", path.display()))?;
            let mut dashboard = Dashboard::start(
                store,
                Box::new(WallClockIds::new()),
                Collaborators {
                    view: MemoryView::default(),
                    notifier: ScriptNotifier,
                    form: FormDraft::new(),
                },
                &settings,
            )?;
            run_script(&mut dashboard, &script)?;
            if args.dump_json {
                print_json(&dashboard)?;
            }
        }
        None => {
            let mut dashboard = Dashboard::start(
                store,
                Box::new(WallClockIds::new()),
                Collaborators {
                    view: MemoryView::default(),
                    notifier: TerminalNotifier,
                    form: FormDraft::new(),
                },
                &settings,
            )?;
            run_interactive(&mut dashboard)?;
            if args.dump_json {
                print_json(&dashboard)?;
            }
        }
    }

    Ok(())
}
