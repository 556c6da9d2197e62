//! Presentation and focus memory around state-changing refreshes.
//!
//! Undo, redo and profile application rewrite every control. Before such a
//! refresh the per-tab scroll offsets, the expanded sections and the focused
//! control are captured; afterwards they are put back so the inspector does
//! not jump. Nothing here is part of an undo snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;

/// Selected range inside a text control, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusedControl {
    pub name: String,
    pub selection: Option<TextSelection>,
}

/// Where a control lives and whether it can take focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    pub tab: String,
    pub section: String,
    pub visible: bool,
    pub enabled: bool,
}

/// Key-value view of the inspector. Controls are addressed by parameter
/// key, tabs by tab key. Unknown names are ignored by every setter.
pub trait ControlSurface {
    fn tabs(&self) -> Vec<String>;

    fn active_tab(&self) -> Option<String>;

    fn scroll_offset(&self, tab: &str) -> Option<f32>;

    fn set_scroll_offset(&mut self, tab: &str, offset: f32);

    /// `(section name, open)` in display order
    fn sections(&self, tab: &str) -> Vec<(String, bool)>;

    fn set_section_open(&mut self, tab: &str, section: &str, open: bool);

    fn focused_control(&self) -> Option<FocusedControl>;

    fn control_info(&self, name: &str) -> Option<ControlInfo>;

    /// Returns false if the control could not take focus
    fn focus_control(&mut self, name: &str, selection: Option<TextSelection>) -> bool;

    /// Write a domain value into a control. `None` disables it.
    /// A control whose value changes raises an edit like user input would.
    fn set_value(&mut self, name: &str, value: Option<&ParamValue>);

    fn set_visible(&mut self, name: &str, visible: bool);

    /// Edits raised since the last call, oldest first
    fn take_pending_edits(&mut self) -> Vec<(String, ParamValue)>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabPresentation {
    pub scroll_offset: f32,
    pub sections: Vec<(String, bool)>,
}

/// Scroll and section state per tab, kept for the window lifetime
#[derive(Debug, Default)]
pub struct PresentationMemory {
    tabs: HashMap<String, TabPresentation>,
}

impl PresentationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, surface: &dyn ControlSurface) {
        for tab in surface.tabs() {
            let entry = TabPresentation {
                scroll_offset: surface.scroll_offset(&tab).unwrap_or(0.0),
                sections: surface.sections(&tab),
            };
            self.tabs.insert(tab, entry);
        }
    }

    pub fn restore(&self, surface: &mut dyn ControlSurface) {
        for (tab, saved) in &self.tabs {
            surface.set_scroll_offset(tab, saved.scroll_offset);
            for (section, open) in &saved.sections {
                surface.set_section_open(tab, section, *open);
            }
        }
    }

    pub fn get(&self, tab: &str) -> Option<&TabPresentation> {
        self.tabs.get(tab)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SavedFocus {
    control: String,
    tab: String,
    selection: Option<TextSelection>,
}

/// Focused control, restored one tick after the refresh that displaced it
#[derive(Debug, Default)]
pub struct FocusMemory {
    saved: Option<SavedFocus>,
    pending: Option<SavedFocus>,
}

impl FocusMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the focused control if it sits in the active tab
    pub fn capture(&mut self, surface: &dyn ControlSurface) {
        self.saved = None;
        let Some(focused) = surface.focused_control() else {
            return;
        };
        let Some(active) = surface.active_tab() else {
            return;
        };
        let Some(info) = surface.control_info(&focused.name) else {
            return;
        };
        if info.tab != active {
            return;
        }
        self.saved = Some(SavedFocus {
            control: focused.name,
            tab: active,
            selection: focused.selection,
        });
    }

    /// Queue the captured focus for the next tick
    pub fn schedule_restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.pending = Some(saved);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the queued focus. Skipped if the control vanished, is hidden or
    /// disabled, or the user switched tabs meanwhile.
    pub fn restore_pending(&mut self, surface: &mut dyn ControlSurface) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let Some(info) = surface.control_info(&pending.control) else {
            return false;
        };
        if !info.visible || !info.enabled || info.tab != pending.tab {
            return false;
        }
        if surface.active_tab().as_deref() != Some(pending.tab.as_str()) {
            return false;
        }
        surface.focus_control(&pending.control, pending.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controls::ControlModel;

    fn surface() -> ControlModel {
        ControlModel::from_params()
    }

    #[test]
    fn test_presentation_round_trip() {
        let mut s = surface();
        s.scroll_to("model", 120.0);
        s.toggle_section("model", "Grip");
        let mut memory = PresentationMemory::new();
        memory.capture(&s);

        s.scroll_to("model", 0.0);
        s.toggle_section("model", "Grip");
        memory.restore(&mut s);

        assert_eq!(s.scroll_offset("model"), Some(120.0));
        let grip = s.sections("model").into_iter().find(|(n, _)| n == "Grip");
        assert_eq!(grip, Some(("Grip".to_string(), false)));
    }

    #[test]
    fn test_focus_restored_after_tick() {
        let mut s = surface();
        s.focus("model.radius", None);
        let mut focus = FocusMemory::new();
        focus.capture(&s);
        s.clear_focus();
        focus.schedule_restore();
        assert!(s.focused_control().is_none());

        assert!(focus.restore_pending(&mut s));
        assert_eq!(s.focused_control().unwrap().name, "model.radius");
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_focus_outside_active_tab_not_captured() {
        let mut s = surface();
        s.focus("light.intensity", None);
        s.select_tab("model");
        let mut focus = FocusMemory::new();
        focus.capture(&s);
        focus.schedule_restore();
        assert!(!focus.has_pending());
    }

    #[test]
    fn test_focus_skipped_for_disabled_control() {
        let mut s = surface();
        s.select_tab("collar");
        s.set_value("collar.tail_taper", Some(&ParamValue::Number(0.5)));
        s.focus("collar.tail_taper", None);
        let mut focus = FocusMemory::new();
        focus.capture(&s);
        s.set_value("collar.tail_taper", None);
        focus.schedule_restore();
        s.clear_focus();
        assert!(!focus.restore_pending(&mut s));
        assert!(s.focused_control().is_none());
    }

    #[test]
    fn test_focus_keeps_text_selection() {
        let mut s = surface();
        s.select_tab("lighting");
        let sel = TextSelection { start: 1, end: 4 };
        s.focus("light.name", Some(sel));
        let mut focus = FocusMemory::new();
        focus.capture(&s);
        s.clear_focus();
        focus.schedule_restore();
        assert!(focus.restore_pending(&mut s));
        assert_eq!(s.focused_control().unwrap().selection, Some(sel));
    }
}
