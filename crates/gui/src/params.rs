//! Named project parameters.
//!
//! Every inspector control is bound to a parameter key such as
//! `model.radius` or `light.intensity`. The table below is the key-value
//! surface the inspector, the command protocol and the focus bridge share:
//! controls are named by their key, values travel as [`ParamValue`].

use serde::{Deserialize, Serialize};
use shared::{
    CollarParams, CollarPreset, EnvironmentSettings, GripStyle, IndicatorShape, KnobLight,
    KnobProject, LightType, LightingMode, MaterialParams, ModelParams, PaintBrushSettings,
    PaintBrushType, PaintChannel, PartMaterialOverrides, ScratchAbrasionType, ScratchSettings,
    ShadowLightMode, ShadowSettings, SurfaceDetailSettings,
};

/// A control value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Color([f32; 3]),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Result<f64, String> {
        match self {
            ParamValue::Number(n) if n.is_finite() => Ok(*n),
            ParamValue::Number(_) => Err("Value is not a finite number".to_string()),
            other => Err(format!("Expected a number, got {other:?}")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, String> {
        match self {
            ParamValue::Bool(b) => Ok(*b),
            other => Err(format!("Expected true/false, got {other:?}")),
        }
    }

    pub fn as_color(&self) -> Result<[f32; 3], String> {
        match self {
            ParamValue::Color(c) if c.iter().all(|v| v.is_finite()) => {
                Ok(c.map(|v| v.clamp(0.0, 1.0)))
            }
            other => Err(format!("Expected an RGB color, got {other:?}")),
        }
    }

    pub fn as_text(&self) -> Result<&str, String> {
        match self {
            ParamValue::Text(t) => Ok(t),
            other => Err(format!("Expected text, got {other:?}")),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<[f32; 3]> for ParamValue {
    fn from(value: [f32; 3]) -> Self {
        ParamValue::Color(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Inspector tabs; the key doubles as the presentation-memory tab id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InspectorTab {
    Model,
    Material,
    Collar,
    Lighting,
    Paint,
}

impl InspectorTab {
    pub fn key(&self) -> &'static str {
        match self {
            InspectorTab::Model => "model",
            InspectorTab::Material => "material",
            InspectorTab::Collar => "collar",
            InspectorTab::Lighting => "lighting",
            InspectorTab::Paint => "paint",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InspectorTab::Model => "Model",
            InspectorTab::Material => "Material",
            InspectorTab::Collar => "Collar",
            InspectorTab::Lighting => "Lighting",
            InspectorTab::Paint => "Paint",
        }
    }

    pub fn all() -> &'static [InspectorTab] {
        &[
            InspectorTab::Model,
            InspectorTab::Material,
            InspectorTab::Collar,
            InspectorTab::Lighting,
            InspectorTab::Paint,
        ]
    }

    pub fn from_key(key: &str) -> Option<InspectorTab> {
        Self::all().iter().copied().find(|t| t.key() == key)
    }
}

/// How a parameter is edited
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    Number { min: f32, max: f32 },
    Count { min: u32, max: u32 },
    Toggle,
    /// Option names, in display order
    Choice(fn() -> Vec<&'static str>),
    Color,
    Text,
}

/// One bindable parameter
#[derive(Clone, Copy)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub tab: InspectorTab,
    pub section: &'static str,
    pub kind: ParamKind,
    /// None when the owning node (model, material, collar, light) is absent
    pub get: fn(&KnobProject) -> Option<ParamValue>,
    pub set: fn(&mut KnobProject, &ParamValue) -> Result<bool, String>,
}

impl std::fmt::Debug for ParamSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamSpec")
            .field("key", &self.key)
            .field("tab", &self.tab)
            .field("section", &self.section)
            .finish()
    }
}

impl ParamSpec {
    /// True if the owning node exists
    pub fn is_available(&self, project: &KnobProject) -> bool {
        (self.get)(project).is_some()
    }
}

fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn missing(key: &str) -> String {
    format!("'{key}' is not available: its scene node does not exist")
}

// ── Parameter groups ────────────────────────────────────────

fn project(p: &KnobProject) -> Option<&KnobProject> {
    Some(p)
}
fn project_mut(p: &mut KnobProject) -> Option<&mut KnobProject> {
    Some(p)
}
fn model(p: &KnobProject) -> Option<&ModelParams> {
    p.scene.model().map(|m| &m.params)
}
fn model_mut(p: &mut KnobProject) -> Option<&mut ModelParams> {
    p.scene.model.as_mut().map(|m| &mut m.params)
}
fn material(p: &KnobProject) -> Option<&MaterialParams> {
    p.scene.material().map(|m| &m.params)
}
fn material_mut(p: &mut KnobProject) -> Option<&mut MaterialParams> {
    p.scene.model.as_mut()?.material.as_mut().map(|m| &mut m.params)
}
fn collar(p: &KnobProject) -> Option<&CollarParams> {
    p.scene.collar().map(|c| &c.params)
}
fn collar_mut(p: &mut KnobProject) -> Option<&mut CollarParams> {
    p.scene.collar_mut().map(|c| &mut c.params)
}
fn light(p: &KnobProject) -> Option<&KnobLight> {
    p.selected_light()
}
fn light_mut(p: &mut KnobProject) -> Option<&mut KnobLight> {
    p.selected_light_mut()
}
fn environment(p: &KnobProject) -> Option<&EnvironmentSettings> {
    Some(&p.environment)
}
fn environment_mut(p: &mut KnobProject) -> Option<&mut EnvironmentSettings> {
    Some(&mut p.environment)
}
fn shadows(p: &KnobProject) -> Option<&ShadowSettings> {
    Some(&p.shadows)
}
fn shadows_mut(p: &mut KnobProject) -> Option<&mut ShadowSettings> {
    Some(&mut p.shadows)
}
fn brush(p: &KnobProject) -> Option<&PaintBrushSettings> {
    Some(&p.brush)
}
fn brush_mut(p: &mut KnobProject) -> Option<&mut PaintBrushSettings> {
    Some(&mut p.brush)
}
fn scratch(p: &KnobProject) -> Option<&ScratchSettings> {
    Some(&p.scratch)
}
fn scratch_mut(p: &mut KnobProject) -> Option<&mut ScratchSettings> {
    Some(&mut p.scratch)
}
fn surface(p: &KnobProject) -> Option<&SurfaceDetailSettings> {
    Some(&p.surface)
}
fn surface_mut(p: &mut KnobProject) -> Option<&mut SurfaceDetailSettings> {
    Some(&mut p.surface)
}

// ── Spec builders ───────────────────────────────────────────

macro_rules! number {
    ($key:literal, $label:literal, $tab:ident, $section:literal,
     $min:literal ..= $max:literal, ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Number { min: $min, max: $max },
            get: |p| $g(p).map(|g| ParamValue::Number(f64::from(g.$field))),
            set: |p, v| {
                let value = (v.as_number()? as f32).clamp($min, $max);
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

macro_rules! count {
    ($key:literal, $label:literal, $tab:ident, $section:literal,
     $min:literal ..= $max:literal, ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Count { min: $min, max: $max },
            get: |p| $g(p).map(|g| ParamValue::Number(f64::from(g.$field))),
            set: |p, v| {
                let value = v.as_number()?.round().clamp(f64::from($min), f64::from($max)) as u32;
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

macro_rules! toggle {
    ($key:literal, $label:literal, $tab:ident, $section:literal,
     ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Toggle,
            get: |p| $g(p).map(|g| ParamValue::Bool(g.$field)),
            set: |p, v| {
                let value = v.as_bool()?;
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

macro_rules! choice {
    ($key:literal, $label:literal, $tab:ident, $section:literal, $ty:ident,
     ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Choice(|| $ty::all().iter().map(|v| v.as_str()).collect()),
            get: |p| $g(p).map(|g| ParamValue::Text(g.$field.as_str().to_string())),
            set: |p, v| {
                let text = v.as_text()?.trim();
                let value = $ty::all()
                    .iter()
                    .copied()
                    .find(|c| c.as_str().eq_ignore_ascii_case(text))
                    .ok_or_else(|| format!("Unknown option '{text}' for '{}'", $key))?;
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

macro_rules! color {
    ($key:literal, $label:literal, $tab:ident, $section:literal,
     ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Color,
            get: |p| $g(p).map(|g| ParamValue::Color(g.$field)),
            set: |p, v| {
                let value = v.as_color()?;
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

macro_rules! text {
    ($key:literal, $label:literal, $tab:ident, $section:literal,
     ($g:ident, $gm:ident) . $field:ident) => {
        ParamSpec {
            key: $key,
            label: $label,
            tab: InspectorTab::$tab,
            section: $section,
            kind: ParamKind::Text,
            get: |p| $g(p).map(|g| ParamValue::Text(g.$field.clone())),
            set: |p, v| {
                let value = v.as_text()?.to_string();
                let g = $gm(p).ok_or_else(|| missing($key))?;
                Ok(assign(&mut g.$field, value))
            },
        }
    };
}

/// Light color is stored as RGBA bytes; the control edits RGB
fn light_color_spec() -> ParamSpec {
    ParamSpec {
        key: "light.color",
        label: "Color",
        tab: InspectorTab::Lighting,
        section: "Selected Light",
        kind: ParamKind::Color,
        get: |p| {
            light(p).map(|l| {
                ParamValue::Color([
                    f32::from(l.color[0]) / 255.0,
                    f32::from(l.color[1]) / 255.0,
                    f32::from(l.color[2]) / 255.0,
                ])
            })
        },
        set: |p, v| {
            let rgb = v.as_color()?;
            let l = light_mut(p).ok_or_else(|| missing("light.color"))?;
            let to_byte = |c: f32| (c * 255.0).round() as u8;
            let color = [to_byte(rgb[0]), to_byte(rgb[1]), to_byte(rgb[2]), l.color[3]];
            Ok(assign(&mut l.color, color))
        },
    }
}

/// Region overrides switch: on copies the base material into each region
fn part_overrides_spec() -> ParamSpec {
    ParamSpec {
        key: "material.part_overrides",
        label: "Per-region overrides",
        tab: InspectorTab::Material,
        section: "Base",
        kind: ParamKind::Toggle,
        get: |p| material(p).map(|m| ParamValue::Bool(m.part_overrides.is_some())),
        set: |p, v| {
            let enabled = v.as_bool()?;
            let m = material_mut(p).ok_or_else(|| missing("material.part_overrides"))?;
            if enabled == m.part_overrides.is_some() {
                return Ok(false);
            }
            let overrides = enabled.then(|| PartMaterialOverrides::from_base(m));
            m.part_overrides = overrides;
            Ok(true)
        },
    }
}

static PARAMS: std::sync::OnceLock<Vec<ParamSpec>> = std::sync::OnceLock::new();

fn build_params() -> Vec<ParamSpec> {
    vec![
        // ── Model ──
        number!("model.radius", "Radius", Model, "Shape", 20.0..=600.0, (model, model_mut).radius),
        number!("model.height", "Height", Model, "Shape", 10.0..=400.0, (model, model_mut).height),
        number!("model.bevel", "Bevel", Model, "Shape", 0.0..=120.0, (model, model_mut).bevel),
        number!("model.bevel_curve", "Bevel curve", Model, "Shape", 0.2..=4.0, (model, model_mut).bevel_curve),
        number!("model.crown_profile", "Crown", Model, "Shape", -1.0..=1.0, (model, model_mut).crown_profile),
        number!("model.top_radius_scale", "Top radius", Model, "Shape", 0.3..=1.5, (model, model_mut).top_radius_scale),
        number!("model.body_taper", "Taper", Model, "Shape", -1.0..=1.0, (model, model_mut).body_taper),
        number!("model.body_bulge", "Bulge", Model, "Shape", -1.0..=1.0, (model, model_mut).body_bulge),
        count!("model.radial_segments", "Segments", Model, "Shape", 12..=720, (model, model_mut).radial_segments),
        choice!("model.grip_style", "Grip style", Model, "Grip", GripStyle, (model, model_mut).grip_style),
        number!("model.grip_start", "Start", Model, "Grip", 0.0..=1.0, (model, model_mut).grip_start),
        number!("model.grip_height", "Height", Model, "Grip", 0.0..=1.0, (model, model_mut).grip_height),
        number!("model.grip_density", "Density", Model, "Grip", 1.0..=400.0, (model, model_mut).grip_density),
        number!("model.grip_pitch", "Pitch", Model, "Grip", 0.5..=40.0, (model, model_mut).grip_pitch),
        number!("model.grip_depth", "Depth", Model, "Grip", 0.0..=10.0, (model, model_mut).grip_depth),
        number!("model.knurl_angle_degrees", "Knurl angle", Model, "Grip", 0.0..=90.0, (model, model_mut).knurl_angle_degrees),
        number!("model.spiral_ridge_height", "Ridge height", Model, "Spiral", 0.0..=2.0, (model, model_mut).spiral_ridge_height),
        number!("model.spiral_ridge_width", "Ridge width", Model, "Spiral", 0.1..=20.0, (model, model_mut).spiral_ridge_width),
        number!("model.spiral_turns", "Turns", Model, "Spiral", 1.0..=800.0, (model, model_mut).spiral_turns),
        toggle!("model.indicator_enabled", "Show indicator", Model, "Indicator", (model, model_mut).indicator_enabled),
        choice!("model.indicator_shape", "Shape", Model, "Indicator", IndicatorShape, (model, model_mut).indicator_shape),
        number!("model.indicator_width", "Width", Model, "Indicator", 0.005..=0.5, (model, model_mut).indicator_width),
        number!("model.indicator_length", "Length", Model, "Indicator", 0.02..=1.0, (model, model_mut).indicator_length),
        number!("model.indicator_position", "Position", Model, "Indicator", 0.0..=1.0, (model, model_mut).indicator_position),
        number!("model.indicator_relief", "Relief", Model, "Indicator", -1.0..=1.0, (model, model_mut).indicator_relief),
        // ── Material ──
        color!("material.base_color", "Base color", Material, "Base", (material, material_mut).base_color),
        number!("material.metallic", "Metallic", Material, "Base", 0.0..=1.0, (material, material_mut).metallic),
        number!("material.roughness", "Roughness", Material, "Base", 0.04..=1.0, (material, material_mut).roughness),
        number!("material.pearlescence", "Pearlescence", Material, "Base", 0.0..=1.0, (material, material_mut).pearlescence),
        part_overrides_spec(),
        number!("material.rust_amount", "Rust", Material, "Aging", 0.0..=1.0, (material, material_mut).rust_amount),
        number!("material.wear_amount", "Wear", Material, "Aging", 0.0..=1.0, (material, material_mut).wear_amount),
        number!("material.gunk_amount", "Gunk", Material, "Aging", 0.0..=1.0, (material, material_mut).gunk_amount),
        number!("material.radial_brush_strength", "Brushing", Material, "Brushing", 0.0..=1.0, (material, material_mut).radial_brush_strength),
        number!("material.radial_brush_density", "Brush density", Material, "Brushing", 1.0..=400.0, (material, material_mut).radial_brush_density),
        number!("material.surface_character", "Surface character", Material, "Brushing", 0.0..=2.0, (material, material_mut).surface_character),
        // ── Collar ──
        toggle!("collar.enabled", "Enabled", Collar, "Geometry", (collar, collar_mut).enabled),
        choice!("collar.preset", "Preset", Collar, "Geometry", CollarPreset, (collar, collar_mut).preset),
        number!("collar.inner_radius_ratio", "Inner radius", Collar, "Geometry", 0.5..=2.0, (collar, collar_mut).inner_radius_ratio),
        number!("collar.gap_to_knob_ratio", "Gap", Collar, "Geometry", 0.0..=0.5, (collar, collar_mut).gap_to_knob_ratio),
        number!("collar.elevation_ratio", "Elevation", Collar, "Geometry", -1.0..=1.0, (collar, collar_mut).elevation_ratio),
        number!("collar.overall_rotation_degrees", "Rotation", Collar, "Geometry", -180.0..=180.0, (collar, collar_mut).overall_rotation_degrees),
        number!("collar.biting_angle_degrees", "Biting angle", Collar, "Geometry", 0.0..=90.0, (collar, collar_mut).biting_angle_degrees),
        number!("collar.body_thickness_ratio", "Body thickness", Collar, "Geometry", 0.01..=0.5, (collar, collar_mut).body_thickness_ratio),
        number!("collar.head_length_ratio", "Head length", Collar, "Geometry", 0.01..=1.0, (collar, collar_mut).head_length_ratio),
        number!("collar.head_thickness_ratio", "Head thickness", Collar, "Geometry", 0.01..=0.5, (collar, collar_mut).head_thickness_ratio),
        number!("collar.tail_taper", "Tail taper", Collar, "Geometry", 0.0..=1.0, (collar, collar_mut).tail_taper),
        count!("collar.segment_count", "Segments", Collar, "Geometry", 16..=2048, (collar, collar_mut).segment_count),
        color!("collar.base_color", "Base color", Collar, "Material", (collar, collar_mut).base_color),
        number!("collar.metallic", "Metallic", Collar, "Material", 0.0..=1.0, (collar, collar_mut).metallic),
        number!("collar.roughness", "Roughness", Collar, "Material", 0.04..=1.0, (collar, collar_mut).roughness),
        number!("collar.pearlescence", "Pearlescence", Collar, "Material", 0.0..=1.0, (collar, collar_mut).pearlescence),
        number!("collar.rust_amount", "Rust", Collar, "Material", 0.0..=1.0, (collar, collar_mut).rust_amount),
        number!("collar.wear_amount", "Wear", Collar, "Material", 0.0..=1.0, (collar, collar_mut).wear_amount),
        number!("collar.gunk_amount", "Gunk", Collar, "Material", 0.0..=1.0, (collar, collar_mut).gunk_amount),
        text!("collar.imported_mesh_path", "Mesh path", Collar, "Imported Mesh", (collar, collar_mut).imported_mesh_path),
        number!("collar.imported_scale", "Scale", Collar, "Imported Mesh", 0.01..=10.0, (collar, collar_mut).imported_scale),
        number!("collar.imported_body_length_scale", "Body length", Collar, "Imported Mesh", 0.1..=4.0, (collar, collar_mut).imported_body_length_scale),
        number!("collar.imported_body_thickness_scale", "Body thickness", Collar, "Imported Mesh", 0.1..=4.0, (collar, collar_mut).imported_body_thickness_scale),
        number!("collar.imported_rotation_degrees", "Rotation", Collar, "Imported Mesh", -180.0..=180.0, (collar, collar_mut).imported_rotation_degrees),
        toggle!("collar.imported_mirror_x", "Mirror X", Collar, "Imported Mesh", (collar, collar_mut).imported_mirror_x),
        toggle!("collar.imported_mirror_y", "Mirror Y", Collar, "Imported Mesh", (collar, collar_mut).imported_mirror_y),
        toggle!("collar.imported_mirror_z", "Mirror Z", Collar, "Imported Mesh", (collar, collar_mut).imported_mirror_z),
        number!("collar.imported_offset_x", "Offset X", Collar, "Imported Mesh", -2.0..=2.0, (collar, collar_mut).imported_offset_x),
        number!("collar.imported_offset_y", "Offset Y", Collar, "Imported Mesh", -2.0..=2.0, (collar, collar_mut).imported_offset_y),
        number!("collar.imported_inflate", "Inflate", Collar, "Imported Mesh", -1.0..=1.0, (collar, collar_mut).imported_inflate),
        // ── Lighting ──
        choice!("lighting.mode", "Lighting mode", Lighting, "Scene", LightingMode, (project, project_mut).lighting_mode),
        color!("environment.top_color", "Sky color", Lighting, "Environment", (environment, environment_mut).top_color),
        color!("environment.bottom_color", "Ground color", Lighting, "Environment", (environment, environment_mut).bottom_color),
        number!("environment.intensity", "Intensity", Lighting, "Environment", 0.0..=4.0, (environment, environment_mut).intensity),
        number!("environment.roughness_mix", "Roughness mix", Lighting, "Environment", 0.0..=1.0, (environment, environment_mut).roughness_mix),
        toggle!("shadows.enabled", "Shadows", Lighting, "Shadows", (shadows, shadows_mut).enabled),
        choice!("shadows.source_mode", "Source", Lighting, "Shadows", ShadowLightMode, (shadows, shadows_mut).source_mode),
        number!("shadows.strength", "Strength", Lighting, "Shadows", 0.0..=1.0, (shadows, shadows_mut).strength),
        number!("shadows.softness", "Softness", Lighting, "Shadows", 0.0..=1.0, (shadows, shadows_mut).softness),
        number!("shadows.distance", "Distance", Lighting, "Shadows", 0.0..=4.0, (shadows, shadows_mut).distance),
        number!("shadows.scale", "Scale", Lighting, "Shadows", 0.1..=4.0, (shadows, shadows_mut).scale),
        number!("shadows.quality", "Quality", Lighting, "Shadows", 0.0..=1.0, (shadows, shadows_mut).quality),
        number!("shadows.gray", "Gray", Lighting, "Shadows", 0.0..=1.0, (shadows, shadows_mut).gray),
        number!("shadows.diffuse_influence", "Diffuse influence", Lighting, "Shadows", 0.0..=1.0, (shadows, shadows_mut).diffuse_influence),
        text!("light.name", "Name", Lighting, "Selected Light", (light, light_mut).name),
        choice!("light.type", "Type", Lighting, "Selected Light", LightType, (light, light_mut).light_type),
        number!("light.x", "X", Lighting, "Selected Light", -2000.0..=2000.0, (light, light_mut).x),
        number!("light.y", "Y", Lighting, "Selected Light", -2000.0..=2000.0, (light, light_mut).y),
        number!("light.z", "Z", Lighting, "Selected Light", -2000.0..=2000.0, (light, light_mut).z),
        number!("light.direction_degrees", "Direction", Lighting, "Selected Light", 0.0..=360.0, (light, light_mut).direction_degrees),
        light_color_spec(),
        number!("light.intensity", "Intensity", Lighting, "Selected Light", 0.0..=8.0, (light, light_mut).intensity),
        number!("light.falloff", "Falloff", Lighting, "Selected Light", 0.0..=4.0, (light, light_mut).falloff),
        number!("light.diffuse_boost", "Diffuse boost", Lighting, "Selected Light", 0.0..=4.0, (light, light_mut).diffuse_boost),
        number!("light.specular_boost", "Specular boost", Lighting, "Selected Light", 0.0..=4.0, (light, light_mut).specular_boost),
        number!("light.specular_power", "Specular power", Lighting, "Selected Light", 1.0..=256.0, (light, light_mut).specular_power),
        // ── Paint ──
        choice!("brush.type", "Brush", Paint, "Brush", PaintBrushType, (brush, brush_mut).brush_type),
        choice!("brush.channel", "Channel", Paint, "Brush", PaintChannel, (brush, brush_mut).channel),
        number!("brush.size", "Size", Paint, "Brush", 1.0..=512.0, (brush, brush_mut).size),
        number!("brush.opacity", "Opacity", Paint, "Brush", 0.0..=1.0, (brush, brush_mut).opacity),
        number!("brush.spread", "Spread", Paint, "Brush", 0.0..=1.0, (brush, brush_mut).spread),
        number!("brush.darkness", "Darkness", Paint, "Brush", 0.0..=1.0, (brush, brush_mut).darkness),
        color!("brush.paint_color", "Paint color", Paint, "Brush", (brush, brush_mut).paint_color),
        choice!("scratch.abrasion_type", "Abrasion", Paint, "Scratch", ScratchAbrasionType, (scratch, scratch_mut).abrasion_type),
        number!("scratch.width", "Width", Paint, "Scratch", 1.0..=200.0, (scratch, scratch_mut).width),
        number!("scratch.depth", "Depth", Paint, "Scratch", 0.0..=1.0, (scratch, scratch_mut).depth),
        number!("scratch.drag_resistance", "Drag resistance", Paint, "Scratch", 0.0..=1.0, (scratch, scratch_mut).drag_resistance),
        number!("scratch.depth_ramp", "Depth ramp", Paint, "Scratch", 0.0..=0.05, (scratch, scratch_mut).depth_ramp),
        color!("scratch.exposed_color", "Exposed color", Paint, "Scratch", (scratch, scratch_mut).exposed_color),
        number!("scratch.exposed_metallic", "Exposed metallic", Paint, "Scratch", 0.0..=1.0, (scratch, scratch_mut).exposed_metallic),
        number!("scratch.exposed_roughness", "Exposed roughness", Paint, "Scratch", 0.0..=1.0, (scratch, scratch_mut).exposed_roughness),
        toggle!("surface.spiral_normal_enabled", "Spiral normals", Paint, "Surface Detail", (surface, surface_mut).spiral_normal_enabled),
        number!("surface.spiral_normal_influence", "Normal influence", Paint, "Surface Detail", 0.0..=2.0, (surface, surface_mut).spiral_normal_influence),
        number!("surface.spiral_normal_lod_fade_start", "LOD fade start", Paint, "Surface Detail", 0.0..=4.0, (surface, surface_mut).spiral_normal_lod_fade_start),
        number!("surface.spiral_normal_lod_fade_end", "LOD fade end", Paint, "Surface Detail", 0.0..=8.0, (surface, surface_mut).spiral_normal_lod_fade_end),
        number!("surface.spiral_roughness_lod_boost", "Roughness LOD boost", Paint, "Surface Detail", 0.0..=1.0, (surface, surface_mut).spiral_roughness_lod_boost),
        toggle!("surface.micro_detail_enabled", "Micro detail", Paint, "Surface Detail", (surface, surface_mut).micro_detail_enabled),
        number!("surface.micro_detail_scale", "Micro scale", Paint, "Surface Detail", 0.1..=4.0, (surface, surface_mut).micro_detail_scale),
        number!("surface.micro_detail_strength", "Micro strength", Paint, "Surface Detail", 0.0..=1.0, (surface, surface_mut).micro_detail_strength),
    ]
}

/// Every bindable parameter, in inspector order
pub fn all_params() -> &'static [ParamSpec] {
    PARAMS.get_or_init(build_params)
}

pub fn find(key: &str) -> Option<&'static ParamSpec> {
    all_params().iter().find(|p| p.key == key)
}

pub fn get_param(project: &KnobProject, key: &str) -> Option<ParamValue> {
    find(key).and_then(|spec| (spec.get)(project))
}

/// Write a parameter. Returns Ok(true) if the project changed.
pub fn set_param(project: &mut KnobProject, key: &str, value: &ParamValue) -> Result<bool, String> {
    let spec = find(key).ok_or_else(|| format!("Unknown parameter '{key}'"))?;
    (spec.set)(project, value)
}

pub fn tab_params(tab: InspectorTab) -> impl Iterator<Item = &'static ParamSpec> {
    all_params().iter().filter(move |p| p.tab == tab)
}

/// Section names of a tab, in first-appearance order
pub fn tab_sections(tab: InspectorTab) -> Vec<&'static str> {
    let mut sections: Vec<&'static str> = Vec::new();
    for spec in tab_params(tab) {
        if !sections.contains(&spec.section) {
            sections.push(spec.section);
        }
    }
    sections
}
