use serde::{Deserialize, Serialize};

/// Материал отдельной зоны ручки (верх, фаска, бок)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMaterial {
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
}

/// Переопределения материала по зонам
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMaterialOverrides {
    pub top: PartMaterial,
    pub bevel: PartMaterial,
    pub side: PartMaterial,
}

impl PartMaterialOverrides {
    /// Все зоны наследуют базовый материал
    pub fn from_base(base: &MaterialParams) -> Self {
        let part = PartMaterial {
            base_color: base.base_color,
            metallic: base.metallic,
            roughness: base.roughness,
        };
        Self {
            top: part.clone(),
            bevel: part.clone(),
            side: part,
        }
    }
}

/// Параметры материала ручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub base_color: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub pearlescence: f32,

    // ── Старение ──
    pub rust_amount: f32,
    pub wear_amount: f32,
    pub gunk_amount: f32,

    // ── Радиальная шлифовка ──
    pub radial_brush_strength: f32,
    pub radial_brush_density: f32,
    pub surface_character: f32,

    /// Переопределения по зонам; при `None` весь корпус из базового материала
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_overrides: Option<PartMaterialOverrides>,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            base_color: [0.55, 0.16, 0.12],
            metallic: 0.0,
            roughness: 0.5,
            pearlescence: 0.0,
            rust_amount: 0.0,
            wear_amount: 0.0,
            gunk_amount: 0.0,
            radial_brush_strength: 0.20,
            radial_brush_density: 56.0,
            surface_character: 1.0,
            part_overrides: None,
        }
    }
}
