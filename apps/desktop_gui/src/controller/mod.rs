//! Controller layer: notifier events and intent dispatch.

pub mod events;
pub mod orchestration;
