use serde::{Deserialize, Serialize};

/// Тип рифления боковой поверхности ручки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripStyle {
    None,
    #[default]
    Knurled,
    Ridged,
    Fluted,
}

impl GripStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            GripStyle::None => "None",
            GripStyle::Knurled => "Knurled",
            GripStyle::Ridged => "Ridged",
            GripStyle::Fluted => "Fluted",
        }
    }

    pub fn all() -> &'static [GripStyle] {
        &[
            GripStyle::None,
            GripStyle::Knurled,
            GripStyle::Ridged,
            GripStyle::Fluted,
        ]
    }
}

/// Форма указателя на верхней грани
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorShape {
    #[default]
    Line,
    Dot,
    Wedge,
    Notch,
}

impl IndicatorShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorShape::Line => "Line",
            IndicatorShape::Dot => "Dot",
            IndicatorShape::Wedge => "Wedge",
            IndicatorShape::Notch => "Notch",
        }
    }

    pub fn all() -> &'static [IndicatorShape] {
        &[
            IndicatorShape::Line,
            IndicatorShape::Dot,
            IndicatorShape::Wedge,
            IndicatorShape::Notch,
        ]
    }
}

/// Параметры процедурной модели ручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub radius: f32,
    pub height: f32,
    pub bevel: f32,
    pub bevel_curve: f32,
    /// Выпуклость верхней грани
    pub crown_profile: f32,
    /// Отношение верхнего радиуса к нижнему (конусность)
    pub top_radius_scale: f32,
    pub body_taper: f32,
    pub body_bulge: f32,
    pub radial_segments: u32,

    // ── Рифление ──
    pub grip_style: GripStyle,
    pub grip_start: f32,
    pub grip_height: f32,
    pub grip_density: f32,
    pub grip_pitch: f32,
    pub grip_depth: f32,
    pub knurl_angle_degrees: f32,

    // ── Спиральные канавки на торце ──
    pub spiral_ridge_height: f32,
    pub spiral_ridge_width: f32,
    pub spiral_turns: f32,

    // ── Указатель ──
    pub indicator_enabled: bool,
    pub indicator_shape: IndicatorShape,
    pub indicator_width: f32,
    pub indicator_length: f32,
    pub indicator_position: f32,
    pub indicator_relief: f32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            radius: 220.0,
            height: 120.0,
            bevel: 18.0,
            bevel_curve: 1.0,
            crown_profile: 0.0,
            top_radius_scale: 0.86,
            body_taper: 0.0,
            body_bulge: 0.0,
            radial_segments: 180,
            grip_style: GripStyle::Knurled,
            grip_start: 0.15,
            grip_height: 0.55,
            grip_density: 60.0,
            grip_pitch: 6.0,
            grip_depth: 1.2,
            knurl_angle_degrees: 30.0,
            spiral_ridge_height: 0.08,
            spiral_ridge_width: 2.2,
            spiral_turns: 180.0,
            indicator_enabled: true,
            indicator_shape: IndicatorShape::Line,
            indicator_width: 0.06,
            indicator_length: 0.28,
            indicator_position: 0.46,
            indicator_relief: 0.0,
        }
    }
}
