use serde::{Deserialize, Serialize};

/// Пресет декоративного кольца вокруг ручки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollarPreset {
    #[default]
    SnakeOuroboros,
    BeadedRing,
    /// Импортированная пользователем сетка
    ImportedMesh,
}

impl CollarPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollarPreset::SnakeOuroboros => "SnakeOuroboros",
            CollarPreset::BeadedRing => "BeadedRing",
            CollarPreset::ImportedMesh => "ImportedMesh",
        }
    }

    pub fn all() -> &'static [CollarPreset] {
        &[
            CollarPreset::SnakeOuroboros,
            CollarPreset::BeadedRing,
            CollarPreset::ImportedMesh,
        ]
    }
}

/// Параметры кольца (воротника) ручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollarParams {
    pub enabled: bool,
    pub preset: CollarPreset,

    // ── Геометрия (в долях радиуса ручки) ──
    pub inner_radius_ratio: f32,
    pub gap_to_knob_ratio: f32,
    pub elevation_ratio: f32,
    pub overall_rotation_degrees: f32,
    pub biting_angle_degrees: f32,
    pub body_thickness_ratio: f32,
    pub head_length_ratio: f32,
    pub head_thickness_ratio: f32,
    pub tail_taper: f32,
    pub segment_count: u32,

    // ── Материал кольца ──
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub pearlescence: f32,
    pub rust_amount: f32,
    pub wear_amount: f32,
    pub gunk_amount: f32,

    // ── Импорт сетки ──
    /// Путь к файлу сетки; пустая строка, если сетка не задана
    #[serde(default)]
    pub imported_mesh_path: String,
    pub imported_scale: f32,
    pub imported_body_length_scale: f32,
    pub imported_body_thickness_scale: f32,
    pub imported_rotation_degrees: f32,
    pub imported_mirror_x: bool,
    pub imported_mirror_y: bool,
    pub imported_mirror_z: bool,
    pub imported_offset_x: f32,
    pub imported_offset_y: f32,
    pub imported_inflate: f32,
}

impl Default for CollarParams {
    fn default() -> Self {
        Self {
            enabled: true,
            preset: CollarPreset::SnakeOuroboros,
            inner_radius_ratio: 1.02,
            gap_to_knob_ratio: 0.02,
            elevation_ratio: 0.0,
            overall_rotation_degrees: 0.0,
            biting_angle_degrees: 14.0,
            body_thickness_ratio: 0.11,
            head_length_ratio: 0.28,
            head_thickness_ratio: 0.17,
            tail_taper: 0.6,
            segment_count: 220,
            base_color: [0.74, 0.74, 0.70],
            metallic: 0.96,
            roughness: 0.32,
            pearlescence: 0.0,
            rust_amount: 0.0,
            wear_amount: 0.0,
            gunk_amount: 0.0,
            imported_mesh_path: String::new(),
            imported_scale: 1.0,
            imported_body_length_scale: 1.0,
            imported_body_thickness_scale: 1.0,
            imported_rotation_degrees: 0.0,
            imported_mirror_x: false,
            imported_mirror_y: false,
            imported_mirror_z: false,
            imported_offset_x: 0.0,
            imported_offset_y: 0.0,
            imported_inflate: 0.0,
        }
    }
}
