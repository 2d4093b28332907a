//! Terminal-backed collaborators.

use std::io::{self, BufRead, Write};

use dashboard_core::{Decision, MapSettings, MapSurface, Notifier};

/// Prints notices and asks y/N questions on stdin.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        println!(">> {message}");
    }

    fn confirm(&mut self, message: &str) -> Decision {
        print!("?? {message} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => Decision::from(is_yes(&answer)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation; treating as no");
                Decision::Declined
            }
        }
    }
}

/// Used for scripted sessions: confirmations arrive later as
/// `resolve_cancellation` intents.
pub struct ScriptNotifier;

impl Notifier for ScriptNotifier {
    fn notify(&mut self, message: &str) {
        println!(">> {message}");
    }

    fn confirm(&mut self, message: &str) -> Decision {
        println!("?? {message} (awaiting resolve_cancellation)");
        Decision::Deferred
    }
}

pub struct TextMap;

impl MapSurface for TextMap {
    fn show_static_map(&mut self, map: &MapSettings) {
        println!(
            "map: center ({:.4}, {:.4}) zoom {}",
            map.center.lat, map.center.lng, map.zoom
        );
        println!(
            "     marker \"{}\" at ({:.4}, {:.4})",
            map.marker.title, map.marker.position.lat, map.marker.position.lng
        );
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
