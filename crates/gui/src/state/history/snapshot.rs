//! Undo snapshot types and capture.
//!
//! A [`ProjectSnapshot`] is a flat, fully owned copy of every piece of
//! undo-relevant state. Cross-entity references inside a snapshot are
//! lookup keys (node kind, light position), never node identities: node ids
//! are regenerated whenever the applier rebuilds a collection.

use serde::{Deserialize, Serialize};
use shared::{EnvironmentSettings, KnobLight, KnobProject, LightType, LightingMode, ShadowSettings};

use super::fingerprint::{fingerprint_struct, Fingerprint, FingerprintWriter};
use crate::state::profile::{capture_reference_profile, ReferenceProfileSnapshot};
use crate::state::selection::{SelectionState, SelectionTarget};
use crate::viewport::host::ViewportHost;

/// One light, without its scene node identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSnapshot {
    pub name: String,
    pub light_type: LightType,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub direction_degrees: f32,
    pub color: [u8; 4],
    pub intensity: f32,
    pub falloff: f32,
    pub diffuse_boost: f32,
    pub specular_boost: f32,
    pub specular_power: f32,
}

impl LightSnapshot {
    pub fn capture(light: &KnobLight) -> Self {
        Self {
            name: light.name.clone(),
            light_type: light.light_type,
            x: light.x,
            y: light.y,
            z: light.z,
            direction_degrees: light.direction_degrees,
            color: light.color,
            intensity: light.intensity,
            falloff: light.falloff,
            diffuse_boost: light.diffuse_boost,
            specular_boost: light.specular_boost,
            specular_power: light.specular_power,
        }
    }

    /// Build a new light with a fresh node id
    pub fn to_light(&self) -> KnobLight {
        KnobLight {
            name: self.name.clone(),
            light_type: self.light_type,
            x: self.x,
            y: self.y,
            z: self.z,
            direction_degrees: self.direction_degrees,
            color: self.color,
            intensity: self.intensity,
            falloff: self.falloff,
            diffuse_boost: self.diffuse_boost,
            specular_boost: self.specular_boost,
            specular_power: self.specular_power,
            ..KnobLight::default()
        }
    }
}

fingerprint_struct!(LightSnapshot {
    name,
    light_type,
    x,
    y,
    z,
    direction_degrees,
    color,
    intensity,
    falloff,
    diffuse_boost,
    specular_boost,
    specular_power,
});

/// Capture the project's light list in order
pub fn capture_lights(project: &KnobProject) -> Vec<LightSnapshot> {
    project.lights.iter().map(LightSnapshot::capture).collect()
}

/// Replace the project's light list with the captured one.
///
/// The list is cleared and rebuilt, never merged. An empty capture yields a
/// single default light, and the selected index is clamped into range.
pub fn restore_lights(project: &mut KnobProject, lights: &[LightSnapshot], selected_index: usize) {
    project.lights = lights.iter().map(LightSnapshot::to_light).collect();
    if project.lights.is_empty() {
        tracing::debug!("Restored light list was empty, synthesizing default light");
        project.ensure_light();
        return;
    }
    project.selected_light_index = selected_index.min(project.lights.len() - 1);
}

/// What was selected in the scene tree, as a lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneSelectionSnapshot {
    SceneRoot,
    Model,
    Material,
    Collar,
    Light {
        index: usize,
    },
    #[default]
    Unknown,
}

impl SceneSelectionSnapshot {
    pub fn capture(selection: &SelectionState, project: &KnobProject) -> Self {
        match selection.target() {
            Some(SelectionTarget::Root) => Self::SceneRoot,
            Some(SelectionTarget::Node(id)) => {
                if let Some(kind) = project.scene.node_kind(id) {
                    return match kind {
                        shared::NodeKind::Model => Self::Model,
                        shared::NodeKind::Material => Self::Material,
                        shared::NodeKind::Collar => Self::Collar,
                    };
                }
                project
                    .lights
                    .iter()
                    .position(|light| light.id == *id)
                    .map_or(Self::Unknown, |index| Self::Light { index })
            }
            None => Self::Unknown,
        }
    }

    /// Re-resolve against the current scene and select the matching node.
    /// Missing nodes clear the selection; light indices are clamped.
    pub fn resolve(&self, project: &KnobProject, selection: &mut SelectionState) {
        let target = match self {
            Self::SceneRoot => Some(SelectionTarget::Root),
            Self::Model => project
                .scene
                .model()
                .map(|m| SelectionTarget::Node(m.id.clone())),
            Self::Material => project
                .scene
                .material()
                .map(|m| SelectionTarget::Node(m.id.clone())),
            Self::Collar => project
                .scene
                .collar()
                .map(|c| SelectionTarget::Node(c.id.clone())),
            Self::Light { index } => {
                let clamped = (*index).min(project.lights.len().saturating_sub(1));
                project
                    .lights
                    .get(clamped)
                    .map(|light| SelectionTarget::Node(light.id.clone()))
            }
            Self::Unknown => None,
        };
        selection.set_target(target);
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::SceneRoot => "SceneRoot",
            Self::Model => "Model",
            Self::Material => "Material",
            Self::Collar => "Collar",
            Self::Light { .. } => "Light",
            Self::Unknown => "Unknown",
        }
    }
}

impl Fingerprint for SceneSelectionSnapshot {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        w.raw(self.as_str());
        if let Self::Light { index } = self {
            w.raw("#");
            index.write_fingerprint(w);
        }
    }
}

/// The undo unit: every piece of undo-relevant state at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub lighting_mode: LightingMode,
    pub lights: Vec<LightSnapshot>,
    pub selected_light_index: usize,
    pub environment: EnvironmentSettings,
    pub shadows: ShadowSettings,
    pub active_paint_layer_index: usize,
    pub focused_paint_layer_index: Option<usize>,
    /// Pointer into the viewport's own pixel-paint history
    pub paint_history_revision: u64,
    /// Model, material, paint defaults and collar; never carries the lighting block
    pub reference: ReferenceProfileSnapshot,
    pub selection: SceneSelectionSnapshot,
}

fingerprint_struct!(ProjectSnapshot {
    lighting_mode,
    lights,
    selected_light_index,
    environment,
    shadows,
    active_paint_layer_index,
    focused_paint_layer_index,
    paint_history_revision,
    reference,
    selection,
});

impl ProjectSnapshot {
    /// Capture the live state. Pure function of its inputs.
    pub fn capture(
        project: &KnobProject,
        viewport: &dyn ViewportHost,
        selection: &SelectionState,
    ) -> Self {
        Self {
            lighting_mode: project.lighting_mode,
            lights: capture_lights(project),
            selected_light_index: project.selected_light_index,
            environment: project.environment.clone(),
            shadows: project.shadows.clone(),
            active_paint_layer_index: viewport.active_paint_layer_index(),
            focused_paint_layer_index: viewport.focused_paint_layer_index(),
            paint_history_revision: viewport.paint_history_revision(),
            reference: capture_reference_profile(project, false),
            selection: SceneSelectionSnapshot::capture(selection, project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::fingerprint::fingerprint;
    use crate::viewport::preview::PreviewViewport;

    #[test]
    fn test_capture_twice_is_stable() {
        let project = KnobProject::default();
        let viewport = PreviewViewport::new();
        let selection = SelectionState::default();

        let a = ProjectSnapshot::capture(&project, &viewport, &selection);
        let b = ProjectSnapshot::capture(&project, &viewport, &selection);
        assert_eq!(a, b);
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_light_ids_do_not_affect_fingerprint() {
        let mut project = KnobProject::default();
        let viewport = PreviewViewport::new();
        let selection = SelectionState::default();
        let before = fingerprint(&ProjectSnapshot::capture(&project, &viewport, &selection));

        project.lights[0].id = shared::new_node_id();
        let after = fingerprint(&ProjectSnapshot::capture(&project, &viewport, &selection));
        assert_eq!(before, after);
    }

    #[test]
    fn test_restore_empty_lights_synthesizes_default() {
        let mut project = KnobProject::default();
        project.add_light();
        restore_lights(&mut project, &[], 3);
        assert_eq!(project.lights.len(), 1);
        assert_eq!(project.selected_light_index, 0);
    }

    #[test]
    fn test_restore_lights_clamps_selection() {
        let mut project = KnobProject::default();
        let lights = vec![
            LightSnapshot::capture(&KnobLight::default_named("A")),
            LightSnapshot::capture(&KnobLight::default_named("B")),
        ];
        restore_lights(&mut project, &lights, 7);
        assert_eq!(project.lights.len(), 2);
        assert_eq!(project.selected_light_index, 1);
        assert_eq!(project.lights[1].name, "B");
    }

    #[test]
    fn test_selection_light_roundtrip_by_position() {
        let mut project = KnobProject::default();
        project.add_light();
        let mut selection = SelectionState::default();
        selection.select_node(project.lights[1].id.clone());

        let captured = SceneSelectionSnapshot::capture(&selection, &project);
        assert_eq!(captured, SceneSelectionSnapshot::Light { index: 1 });

        // Rebuild lights: identities change, position resolves again
        let lights = capture_lights(&project);
        restore_lights(&mut project, &lights, 1);
        captured.resolve(&project, &mut selection);
        assert!(selection.is_selected(&project.lights[1].id));
    }

    #[test]
    fn test_selection_missing_collar_clears() {
        let project = KnobProject::default();
        let mut selection = SelectionState::default();
        selection.select_root();
        SceneSelectionSnapshot::Collar.resolve(&project, &mut selection);
        assert!(selection.target().is_none());
    }

    #[test]
    fn test_selection_fingerprint_includes_index() {
        assert_ne!(
            fingerprint(&SceneSelectionSnapshot::Light { index: 0 }),
            fingerprint(&SceneSelectionSnapshot::Light { index: 1 })
        );
    }
}
