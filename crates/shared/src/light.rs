use serde::{Deserialize, Serialize};

use crate::{new_node_id, NodeId};

/// Тип источника света
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightType {
    #[default]
    Directional,
    Point,
    Spot,
}

impl LightType {
    /// Имя варианта (используется в отпечатках состояния и UI)
    pub fn as_str(&self) -> &'static str {
        match self {
            LightType::Directional => "Directional",
            LightType::Point => "Point",
            LightType::Spot => "Spot",
        }
    }

    pub fn all() -> &'static [LightType] {
        &[LightType::Directional, LightType::Point, LightType::Spot]
    }
}

/// Режим освещения сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    #[default]
    Realistic,
    Artistic,
    Both,
}

impl LightingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightingMode::Realistic => "Realistic",
            LightingMode::Artistic => "Artistic",
            LightingMode::Both => "Both",
        }
    }

    pub fn all() -> &'static [LightingMode] {
        &[LightingMode::Realistic, LightingMode::Artistic, LightingMode::Both]
    }
}

/// Источник света проекта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobLight {
    /// Идентификатор узла в дереве сцены (не сохраняется в снимках)
    #[serde(default = "new_node_id")]
    pub id: NodeId,
    pub name: String,
    pub light_type: LightType,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Направление в градусах (для направленного и прожекторного света)
    pub direction_degrees: f32,
    /// Цвет RGBA
    pub color: [u8; 4],
    pub intensity: f32,
    pub falloff: f32,
    pub diffuse_boost: f32,
    pub specular_boost: f32,
    pub specular_power: f32,
}

impl KnobLight {
    /// Свет по умолчанию, используется, если список источников пуст
    pub fn default_named(name: impl Into<String>) -> Self {
        Self {
            id: new_node_id(),
            name: name.into(),
            light_type: LightType::Directional,
            x: -420.0,
            y: -380.0,
            z: 620.0,
            direction_degrees: 315.0,
            color: [255, 244, 229, 255],
            intensity: 1.2,
            falloff: 1.0,
            diffuse_boost: 1.0,
            specular_boost: 1.0,
            specular_power: 64.0,
        }
    }
}

impl Default for KnobLight {
    fn default() -> Self {
        Self::default_named("Key Light")
    }
}
