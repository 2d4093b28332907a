//! Booking dashboard core: renders the booking store into a view and turns
//! user intents into store mutations.

pub mod binder;
pub mod collaborators;
pub mod config;
pub mod memory;
pub mod navigation;
pub mod render;

pub use binder::{
    CancelOutcome, Collaborators, Dashboard, IntentOutcome, PendingCancellation, CANCEL_PROMPT,
};
pub use collaborators::{Decision, ElementRef, FormInput, MapSurface, Notifier, ViewBinding};
pub use config::{load_settings, MapSettings, Settings};
pub use memory::{FormDraft, MemoryView};
pub use render::{ItemView, SegmentView};
