//! In-memory model of the inspector controls.
//!
//! The egui inspector draws from this model and pushes user edits into it;
//! the headless harness drives it directly. Writing a value that differs
//! from the cached one queues an edit, the same echo a toolkit widget
//! raises when its value is set programmatically.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::params::{all_params, tab_sections, InspectorTab, ParamValue};

use super::presentation::{ControlInfo, ControlSurface, FocusedControl, TextSelection};

#[derive(Debug, Clone)]
struct ControlSlot {
    tab: String,
    section: String,
    value: Option<ParamValue>,
    visible: bool,
    enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ControlModel {
    tabs: Vec<String>,
    active_tab: String,
    controls: BTreeMap<String, ControlSlot>,
    sections: HashMap<String, Vec<(String, bool)>>,
    scroll: HashMap<String, f32>,
    focused: Option<FocusedControl>,
    pending_edits: Vec<(String, ParamValue)>,
    /// Tabs whose scroll offset was set programmatically and must be
    /// pushed into the widget on the next frame
    scroll_requests: HashSet<String>,
    focus_request: Option<FocusedControl>,
}

impl Default for ControlModel {
    fn default() -> Self {
        Self::from_params()
    }
}

impl ControlModel {
    /// One control per bindable parameter, all sections expanded
    pub fn from_params() -> Self {
        let tabs: Vec<String> = InspectorTab::all()
            .iter()
            .map(|t| t.key().to_string())
            .collect();
        let controls = all_params()
            .iter()
            .map(|spec| {
                let slot = ControlSlot {
                    tab: spec.tab.key().to_string(),
                    section: spec.section.to_string(),
                    value: None,
                    visible: true,
                    enabled: true,
                };
                (spec.key.to_string(), slot)
            })
            .collect();
        let sections = InspectorTab::all()
            .iter()
            .map(|tab| {
                let list = tab_sections(*tab)
                    .into_iter()
                    .map(|s| (s.to_string(), true))
                    .collect();
                (tab.key().to_string(), list)
            })
            .collect();
        Self {
            active_tab: InspectorTab::Model.key().to_string(),
            tabs,
            controls,
            sections,
            scroll: HashMap::new(),
            focused: None,
            pending_edits: Vec::new(),
            scroll_requests: HashSet::new(),
            focus_request: None,
        }
    }

    // ── User input ──────────────────────────────────────────

    /// A user edit: updates the cached value and queues it
    pub fn edit(&mut self, name: &str, value: ParamValue) {
        if let Some(slot) = self.controls.get_mut(name) {
            if !slot.enabled {
                return;
            }
            slot.value = Some(value.clone());
            self.pending_edits.push((name.to_string(), value));
        }
    }

    pub fn select_tab(&mut self, tab: &str) {
        if self.tabs.iter().any(|t| t == tab) {
            self.active_tab = tab.to_string();
        }
    }

    pub fn scroll_to(&mut self, tab: &str, offset: f32) {
        self.scroll.insert(tab.to_string(), offset.max(0.0));
    }

    pub fn toggle_section(&mut self, tab: &str, section: &str) {
        if let Some(entry) = self.section_mut(tab, section) {
            entry.1 = !entry.1;
        }
    }

    pub fn focus(&mut self, name: &str, selection: Option<TextSelection>) {
        if self.controls.contains_key(name) {
            self.focused = Some(FocusedControl {
                name: name.to_string(),
                selection,
            });
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    // ── Widget side ─────────────────────────────────────────

    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.controls.get(name).and_then(|s| s.value.as_ref())
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.controls.get(name).is_some_and(|s| s.enabled)
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.controls.get(name).is_some_and(|s| s.visible)
    }

    pub fn is_section_open(&self, tab: &str, section: &str) -> bool {
        self.sections
            .get(tab)
            .and_then(|list| list.iter().find(|(n, _)| n == section))
            .map_or(true, |(_, open)| *open)
    }

    /// Record the open state the widget currently shows
    pub fn note_section_open(&mut self, tab: &str, section: &str, open: bool) {
        if let Some(entry) = self.section_mut(tab, section) {
            entry.1 = open;
        }
    }

    /// Scroll offset that must be forced into the widget this frame
    pub fn take_scroll_request(&mut self, tab: &str) -> Option<f32> {
        if self.scroll_requests.remove(tab) {
            self.scroll.get(tab).copied()
        } else {
            None
        }
    }

    pub fn take_focus_request(&mut self) -> Option<FocusedControl> {
        self.focus_request.take()
    }

    fn section_mut(&mut self, tab: &str, section: &str) -> Option<&mut (String, bool)> {
        self.sections
            .get_mut(tab)?
            .iter_mut()
            .find(|(n, _)| n == section)
    }
}

impl ControlSurface for ControlModel {
    fn tabs(&self) -> Vec<String> {
        self.tabs.clone()
    }

    fn active_tab(&self) -> Option<String> {
        Some(self.active_tab.clone())
    }

    fn scroll_offset(&self, tab: &str) -> Option<f32> {
        if !self.tabs.iter().any(|t| t == tab) {
            return None;
        }
        Some(self.scroll.get(tab).copied().unwrap_or(0.0))
    }

    fn set_scroll_offset(&mut self, tab: &str, offset: f32) {
        if self.scroll_offset(tab) == Some(offset) {
            return;
        }
        self.scroll_to(tab, offset);
        self.scroll_requests.insert(tab.to_string());
    }

    fn sections(&self, tab: &str) -> Vec<(String, bool)> {
        self.sections.get(tab).cloned().unwrap_or_default()
    }

    fn set_section_open(&mut self, tab: &str, section: &str, open: bool) {
        self.note_section_open(tab, section, open);
    }

    fn focused_control(&self) -> Option<FocusedControl> {
        self.focused.clone()
    }

    fn control_info(&self, name: &str) -> Option<ControlInfo> {
        self.controls.get(name).map(|slot| ControlInfo {
            tab: slot.tab.clone(),
            section: slot.section.clone(),
            visible: slot.visible,
            enabled: slot.enabled,
        })
    }

    fn focus_control(&mut self, name: &str, selection: Option<TextSelection>) -> bool {
        let Some(slot) = self.controls.get(name) else {
            return false;
        };
        if !slot.visible || !slot.enabled {
            return false;
        }
        let target = FocusedControl {
            name: name.to_string(),
            selection,
        };
        self.focused = Some(target.clone());
        self.focus_request = Some(target);
        true
    }

    fn set_value(&mut self, name: &str, value: Option<&ParamValue>) {
        let Some(slot) = self.controls.get_mut(name) else {
            return;
        };
        slot.enabled = value.is_some();
        let Some(value) = value else {
            return;
        };
        if slot.value.as_ref() == Some(value) {
            return;
        }
        slot.value = Some(value.clone());
        self.pending_edits.push((name.to_string(), value.clone()));
    }

    fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(slot) = self.controls.get_mut(name) {
            slot.visible = visible;
        }
    }

    fn take_pending_edits(&mut self) -> Vec<(String, ParamValue)> {
        std::mem::take(&mut self.pending_edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmatic_write_raises_echo_once() {
        let mut m = ControlModel::from_params();
        m.set_value("model.radius", Some(&ParamValue::Number(220.0)));
        m.set_value("model.radius", Some(&ParamValue::Number(220.0)));
        let edits = m.take_pending_edits();
        assert_eq!(edits.len(), 1);
        assert!(m.take_pending_edits().is_empty());
    }

    #[test]
    fn test_disabled_control_ignores_user_edit() {
        let mut m = ControlModel::from_params();
        m.set_value("collar.tail_taper", None);
        m.edit("collar.tail_taper", ParamValue::Number(0.3));
        assert!(m.take_pending_edits().is_empty());
        assert!(!m.is_enabled("collar.tail_taper"));
    }

    #[test]
    fn test_scroll_request_only_for_programmatic_changes() {
        let mut m = ControlModel::from_params();
        m.scroll_to("paint", 40.0);
        assert_eq!(m.take_scroll_request("paint"), None);
        m.set_scroll_offset("paint", 10.0);
        assert_eq!(m.take_scroll_request("paint"), Some(10.0));
        assert_eq!(m.take_scroll_request("paint"), None);
    }

    #[test]
    fn test_unknown_names_ignored() {
        let mut m = ControlModel::from_params();
        m.set_value("nope", Some(&ParamValue::Bool(true)));
        assert!(!m.focus_control("nope", None));
        assert!(m.control_info("nope").is_none());
        assert_eq!(m.scroll_offset("nope"), None);
    }
}
