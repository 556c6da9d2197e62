//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `KnobProject`, lights, collars
//! and reference profiles used in tests and by scripted sessions.

use shared::*;

use crate::state::profile::{capture_reference_profile, ReferenceProfile};

// ── Light factories ─────────────────────────────────────────────

/// Create a light of the given type at a position.
pub fn light(name: &str, light_type: LightType, pos: [f32; 3], intensity: f32) -> KnobLight {
    KnobLight {
        light_type,
        x: pos[0],
        y: pos[1],
        z: pos[2],
        intensity,
        ..KnobLight::default_named(name)
    }
}

/// Classic three-point rig: key, fill and rim.
pub fn three_point_lights() -> Vec<KnobLight> {
    vec![
        light("Key", LightType::Directional, [-420.0, -380.0, 620.0], 1.2),
        light("Fill", LightType::Point, [380.0, -200.0, 400.0], 0.5),
        light("Rim", LightType::Spot, [0.0, 450.0, 300.0], 0.8),
    ]
}

// ── Collar factories ────────────────────────────────────────────

/// Collar with a preset and otherwise default parameters.
pub fn collar(preset: CollarPreset) -> CollarParams {
    CollarParams {
        enabled: true,
        preset,
        ..CollarParams::default()
    }
}

/// Collar using an imported mesh file.
pub fn imported_collar(path: &str, scale: f32) -> CollarParams {
    CollarParams {
        preset: CollarPreset::ImportedMesh,
        imported_mesh_path: path.to_string(),
        imported_scale: scale,
        ..collar(CollarPreset::ImportedMesh)
    }
}

// ── Project factories ───────────────────────────────────────────

/// Default project: one light, model with material, no collar.
pub fn basic_project() -> KnobProject {
    KnobProject::default()
}

/// Project with a knob of the given radius and height.
pub fn knob_project(radius: f32, height: f32) -> KnobProject {
    let mut project = KnobProject::default();
    let model = project.scene.ensure_model();
    model.params.radius = radius;
    model.params.height = height;
    project
}

/// Project with the three-point rig and the rim light selected.
pub fn lit_project() -> KnobProject {
    KnobProject {
        lights: three_point_lights(),
        selected_light_index: 2,
        ..KnobProject::default()
    }
}

/// Project with a collar attached to the model.
pub fn collared_project(preset: CollarPreset) -> KnobProject {
    let mut project = KnobProject::default();
    project.scene.ensure_collar().params = collar(preset);
    project
}

/// Project with an empty scene graph (no model node).
pub fn empty_scene_project() -> KnobProject {
    KnobProject {
        scene: SceneGraph::default(),
        ..KnobProject::default()
    }
}

/// Aged brass look: warm base, some rust and wear.
pub fn brass_project() -> KnobProject {
    let mut project = KnobProject::default();
    let material = &mut project.scene.ensure_material().params;
    material.base_color = [0.78, 0.6, 0.3];
    material.metallic = 1.0;
    material.roughness = 0.35;
    material.rust_amount = 0.2;
    material.wear_amount = 0.4;
    project
}

// ── Profile factories ───────────────────────────────────────────

/// Named profile captured from a project, lighting included.
pub fn profile_from(name: &str, project: &KnobProject) -> ReferenceProfile {
    ReferenceProfile {
        name: name.to_string(),
        snapshot: capture_reference_profile(project, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_project() {
        let p = knob_project(300.0, 90.0);
        let params = &p.scene.model().unwrap().params;
        assert_eq!(params.radius, 300.0);
        assert_eq!(params.height, 90.0);
    }

    #[test]
    fn test_lit_project_selection_in_range() {
        let p = lit_project();
        assert_eq!(p.lights.len(), 3);
        assert_eq!(p.selected_light().unwrap().name, "Rim");
    }

    #[test]
    fn test_collared_project() {
        let p = collared_project(CollarPreset::BeadedRing);
        assert_eq!(p.scene.collar().unwrap().params.preset, CollarPreset::BeadedRing);
    }

    #[test]
    fn test_empty_scene_has_no_model() {
        let p = empty_scene_project();
        assert!(p.scene.model().is_none());
        assert_eq!(p.lights.len(), 1);
    }

    #[test]
    fn test_profile_from_carries_lighting() {
        let p = lit_project();
        let profile = profile_from("Studio", &p);
        assert_eq!(profile.snapshot.lighting.unwrap().lights.len(), 3);
    }
}
