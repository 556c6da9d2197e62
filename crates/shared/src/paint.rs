use serde::{Deserialize, Serialize};

/// Форма кисти для рисования по поверхности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintBrushType {
    #[default]
    Spray,
    Stroke,
    Circle,
    Square,
    Splat,
}

impl PaintBrushType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaintBrushType::Spray => "Spray",
            PaintBrushType::Stroke => "Stroke",
            PaintBrushType::Circle => "Circle",
            PaintBrushType::Square => "Square",
            PaintBrushType::Splat => "Splat",
        }
    }

    pub fn all() -> &'static [PaintBrushType] {
        &[
            PaintBrushType::Spray,
            PaintBrushType::Stroke,
            PaintBrushType::Circle,
            PaintBrushType::Square,
            PaintBrushType::Splat,
        ]
    }
}

/// Канал, в который рисует кисть
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintChannel {
    #[default]
    Rust,
    Wear,
    Gunk,
    Scratch,
    Erase,
    Color,
}

impl PaintChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaintChannel::Rust => "Rust",
            PaintChannel::Wear => "Wear",
            PaintChannel::Gunk => "Gunk",
            PaintChannel::Scratch => "Scratch",
            PaintChannel::Erase => "Erase",
            PaintChannel::Color => "Color",
        }
    }

    pub fn all() -> &'static [PaintChannel] {
        &[
            PaintChannel::Rust,
            PaintChannel::Wear,
            PaintChannel::Gunk,
            PaintChannel::Scratch,
            PaintChannel::Erase,
            PaintChannel::Color,
        ]
    }
}

/// Параметры кисти
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintBrushSettings {
    pub brush_type: PaintBrushType,
    pub channel: PaintChannel,
    /// Размер кисти в пикселях маски
    pub size: f32,
    pub opacity: f32,
    pub spread: f32,
    pub darkness: f32,
    /// Цвет для канала Color, RGB 0..1
    pub paint_color: [f32; 3],
}

impl Default for PaintBrushSettings {
    fn default() -> Self {
        Self {
            brush_type: PaintBrushType::Spray,
            channel: PaintChannel::Rust,
            size: 32.0,
            opacity: 0.5,
            spread: 0.35,
            darkness: 0.58,
            paint_color: [0.85, 0.85, 0.85],
        }
    }
}

/// Тип абразива для царапин
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScratchAbrasionType {
    #[default]
    Needle,
    Chisel,
    Burr,
    Scuff,
}

impl ScratchAbrasionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScratchAbrasionType::Needle => "Needle",
            ScratchAbrasionType::Chisel => "Chisel",
            ScratchAbrasionType::Burr => "Burr",
            ScratchAbrasionType::Scuff => "Scuff",
        }
    }

    pub fn all() -> &'static [ScratchAbrasionType] {
        &[
            ScratchAbrasionType::Needle,
            ScratchAbrasionType::Chisel,
            ScratchAbrasionType::Burr,
            ScratchAbrasionType::Scuff,
        ]
    }
}

/// Параметры инструмента царапин
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchSettings {
    pub abrasion_type: ScratchAbrasionType,
    pub width: f32,
    pub depth: f32,
    pub drag_resistance: f32,
    /// Нарастание глубины вдоль штриха
    pub depth_ramp: f32,
    /// Цвет обнажённого металла RGB 0..1
    pub exposed_color: [f32; 3],
    pub exposed_metallic: f32,
    pub exposed_roughness: f32,
}

impl Default for ScratchSettings {
    fn default() -> Self {
        Self {
            abrasion_type: ScratchAbrasionType::Needle,
            width: 20.0,
            depth: 0.45,
            drag_resistance: 0.38,
            depth_ramp: 0.0015,
            exposed_color: [0.88, 0.88, 0.90],
            exposed_metallic: 1.0,
            exposed_roughness: 0.20,
        }
    }
}

/// Микродетализация поверхности: нормали спиральных канавок и их LOD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDetailSettings {
    pub spiral_normal_enabled: bool,
    pub spiral_normal_influence: f32,
    /// Начало затухания нормалей (в пикселях на канавку)
    pub spiral_normal_lod_fade_start: f32,
    pub spiral_normal_lod_fade_end: f32,
    pub spiral_roughness_lod_boost: f32,
    pub micro_detail_enabled: bool,
    pub micro_detail_scale: f32,
    pub micro_detail_strength: f32,
}

impl Default for SurfaceDetailSettings {
    fn default() -> Self {
        Self {
            spiral_normal_enabled: true,
            spiral_normal_influence: 1.0,
            spiral_normal_lod_fade_start: 0.55,
            spiral_normal_lod_fade_end: 1.35,
            spiral_roughness_lod_boost: 0.2,
            micro_detail_enabled: true,
            micro_detail_scale: 1.0,
            micro_detail_strength: 0.35,
        }
    }
}
