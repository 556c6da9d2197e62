//! Reference profiles: model + material (+ collar, + lighting) looks.
//!
//! The same snapshot shape serves the undo engine (captured without the
//! lighting block) and named user profiles (captured with it), so capture
//! and apply live here once.

mod library;
mod store;

pub use library::{
    normalize_profile_name, DestructiveAction, ProfileAction, ProfileError, ProfileLibrary,
    ReferenceProfile, CONFIRM_WINDOW,
};
pub use store::{ProfileStore, StoreError, PROFILE_STORE_VERSION};

use serde::{Deserialize, Serialize};
use shared::{
    CollarParams, EnvironmentSettings, KnobProject, LightingMode, MaterialParams, ModelParams,
    PaintBrushSettings, ScratchSettings, ShadowSettings, SurfaceDetailSettings,
};

use super::history::fingerprint::fingerprint_struct;
use super::history::snapshot::{capture_lights, restore_lights, LightSnapshot};

/// Lighting, environment and shadow settings carried by named profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingEnvironmentShadow {
    pub lighting_mode: LightingMode,
    pub lights: Vec<LightSnapshot>,
    pub selected_light_index: usize,
    pub environment: EnvironmentSettings,
    pub shadows: ShadowSettings,
}

fingerprint_struct!(LightingEnvironmentShadow {
    lighting_mode,
    lights,
    selected_light_index,
    environment,
    shadows,
});

/// Model + material snapshot, optionally with collar and lighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfileSnapshot {
    pub model: ModelParams,
    pub material: MaterialParams,
    pub brush: PaintBrushSettings,
    pub scratch: ScratchSettings,
    #[serde(default)]
    pub surface: SurfaceDetailSettings,
    /// `None` removes an existing collar on apply
    #[serde(default)]
    pub collar: Option<CollarParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<LightingEnvironmentShadow>,
}

fingerprint_struct!(ReferenceProfileSnapshot {
    model,
    material,
    brush,
    scratch,
    surface,
    collar,
    lighting,
});

/// Capture the current look. Missing model or material nodes capture as
/// defaults, matching what apply would create.
pub fn capture_reference_profile(
    project: &KnobProject,
    include_lighting: bool,
) -> ReferenceProfileSnapshot {
    let model = project
        .scene
        .model()
        .map(|m| m.params.clone())
        .unwrap_or_default();
    let material = project
        .scene
        .material()
        .map(|m| m.params.clone())
        .unwrap_or_default();
    let lighting = include_lighting.then(|| LightingEnvironmentShadow {
        lighting_mode: project.lighting_mode,
        lights: capture_lights(project),
        selected_light_index: project.selected_light_index,
        environment: project.environment.clone(),
        shadows: project.shadows.clone(),
    });

    ReferenceProfileSnapshot {
        model,
        material,
        brush: project.brush.clone(),
        scratch: project.scratch.clone(),
        surface: project.surface.clone(),
        collar: project.scene.collar().map(|c| c.params.clone()),
        lighting,
    }
}

/// Apply a captured look onto the project, creating model and material
/// nodes if needed. The collar follows tombstone-by-omission: a snapshot
/// without a collar deletes the existing collar node.
pub fn apply_reference_profile(project: &mut KnobProject, snapshot: &ReferenceProfileSnapshot) {
    if let Some(lighting) = &snapshot.lighting {
        project.lighting_mode = lighting.lighting_mode;
        project.environment = lighting.environment.clone();
        project.shadows = lighting.shadows.clone();
        restore_lights(project, &lighting.lights, lighting.selected_light_index);
    }

    project.brush = snapshot.brush.clone();
    project.scratch = snapshot.scratch.clone();
    project.surface = snapshot.surface.clone();

    project.scene.ensure_model().params = snapshot.model.clone();
    project.scene.ensure_material().params = snapshot.material.clone();

    match &snapshot.collar {
        // Imported mesh fields are taken as-is, even when they disagree with the preset
        Some(collar) => project.scene.ensure_collar().params = collar.clone(),
        None => {
            if project.scene.remove_collar() {
                tracing::debug!("Profile has no collar, removed collar node");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::fingerprint::fingerprint;

    #[test]
    fn test_capture_without_lighting_block() {
        let project = KnobProject::default();
        let snapshot = capture_reference_profile(&project, false);
        assert!(snapshot.lighting.is_none());
        assert!(snapshot.collar.is_none());
    }

    #[test]
    fn test_capture_with_lighting_block() {
        let mut project = KnobProject::default();
        project.add_light();
        let snapshot = capture_reference_profile(&project, true);
        let lighting = snapshot.lighting.unwrap();
        assert_eq!(lighting.lights.len(), 2);
        assert_eq!(lighting.selected_light_index, 1);
    }

    #[test]
    fn test_apply_without_lighting_keeps_lights() {
        let mut project = KnobProject::default();
        project.add_light();
        let snapshot = capture_reference_profile(&KnobProject::default(), false);
        apply_reference_profile(&mut project, &snapshot);
        assert_eq!(project.lights.len(), 2);
    }

    #[test]
    fn test_apply_with_lighting_replaces_lights() {
        let mut source = KnobProject::default();
        source.environment.intensity = 0.9;
        source.lights[0].intensity = 3.0;
        let snapshot = capture_reference_profile(&source, true);

        let mut target = KnobProject::default();
        target.add_light();
        target.add_light();
        apply_reference_profile(&mut target, &snapshot);
        assert_eq!(target.lights.len(), 1);
        assert_eq!(target.lights[0].intensity, 3.0);
        assert_eq!(target.environment.intensity, 0.9);
    }

    #[test]
    fn test_collar_roundtrip_and_tombstone() {
        let mut source = KnobProject::default();
        source.scene.ensure_collar().params.tail_taper = 0.25;
        let with_collar = capture_reference_profile(&source, false);
        let without_collar = capture_reference_profile(&KnobProject::default(), false);

        let mut target = KnobProject::default();
        apply_reference_profile(&mut target, &with_collar);
        assert_eq!(target.scene.collar().unwrap().params.tail_taper, 0.25);

        apply_reference_profile(&mut target, &without_collar);
        assert!(target.scene.collar().is_none());
    }

    #[test]
    fn test_capture_apply_capture_is_stable() {
        let mut source = KnobProject::default();
        source.scene.ensure_model().params.bevel = 4.0;
        source.scene.ensure_material().params.metallic = 1.0;
        let snapshot = capture_reference_profile(&source, true);

        let mut target = KnobProject::default();
        apply_reference_profile(&mut target, &snapshot);
        assert_eq!(
            fingerprint(&capture_reference_profile(&target, true)),
            fingerprint(&snapshot)
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut project = KnobProject::default();
        project.scene.ensure_collar();
        let snapshot = capture_reference_profile(&project, true);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ReferenceProfileSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
