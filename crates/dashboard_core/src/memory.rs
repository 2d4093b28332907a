//! In-memory collaborators. Front-ends paint from these instead of owning layout state.

use std::collections::{BTreeMap, BTreeSet};

use shared::domain::{Section, TripStatus};

use crate::{
    collaborators::{fields, ElementRef, FormInput, ViewBinding},
    render::SegmentView,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    visible: BTreeMap<ElementRef, bool>,
    active: BTreeMap<ElementRef, bool>,
    content: BTreeMap<ElementRef, SegmentView>,
    missing: BTreeSet<ElementRef>,
}

impl MemoryView {
    /// A layout that lacks some elements; used to exercise startup wiring checks.
    pub fn without(missing: impl IntoIterator<Item = ElementRef>) -> Self {
        Self {
            missing: missing.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_visible(&self, element: ElementRef) -> bool {
        self.visible.get(&element).copied().unwrap_or(false)
    }

    pub fn is_active(&self, element: ElementRef) -> bool {
        self.active.get(&element).copied().unwrap_or(false)
    }

    pub fn content(&self, status: TripStatus) -> Option<&SegmentView> {
        self.content.get(&ElementRef::List(status))
    }

    pub fn active_section(&self) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| self.is_active(ElementRef::Section(*section)))
    }

    pub fn visible_tab(&self) -> Option<TripStatus> {
        TripStatus::ALL
            .into_iter()
            .find(|tab| self.is_visible(ElementRef::TabContent(*tab)))
    }
}

impl ViewBinding for MemoryView {
    fn has_element(&self, element: ElementRef) -> bool {
        !self.missing.contains(&element)
    }

    fn set_visible(&mut self, element: ElementRef, visible: bool) {
        self.visible.insert(element, visible);
    }

    fn set_active(&mut self, element: ElementRef, active: bool) {
        self.active.insert(element, active);
    }

    fn set_content(&mut self, element: ElementRef, content: SegmentView) {
        self.content.insert(element, content);
    }
}

/// Booking form values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Text-box binding for GUI front-ends; creates the field on first use.
    pub fn field_mut(&mut self, name: &str) -> &mut String {
        self.values.entry(name.to_string()).or_default()
    }

    pub fn is_blank(&self) -> bool {
        fields::ALL
            .iter()
            .all(|(name, _)| self.values.get(*name).map_or(true, |value| value.is_empty()))
    }
}

impl FormInput for FormDraft {
    fn read_field(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}
