use serde::{Deserialize, Serialize};

/// Настройки окружения (градиентное небо и отражения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// Цвет верхней полусферы RGB 0..1
    pub top_color: [f32; 3],
    /// Цвет нижней полусферы RGB 0..1
    pub bottom_color: [f32; 3],
    pub intensity: f32,
    /// Доля шероховатости в размытии отражений
    pub roughness_mix: f32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            top_color: [0.34, 0.36, 0.39],
            bottom_color: [0.06, 0.06, 0.07],
            intensity: 0.36,
            roughness_mix: 1.0,
        }
    }
}

/// Какой источник света отбрасывает тень
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowLightMode {
    #[default]
    Selected,
    Dominant,
    Weighted,
}

impl ShadowLightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowLightMode::Selected => "Selected",
            ShadowLightMode::Dominant => "Dominant",
            ShadowLightMode::Weighted => "Weighted",
        }
    }

    pub fn all() -> &'static [ShadowLightMode] {
        &[
            ShadowLightMode::Selected,
            ShadowLightMode::Dominant,
            ShadowLightMode::Weighted,
        ]
    }
}

/// Настройки теней
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowSettings {
    pub enabled: bool,
    pub source_mode: ShadowLightMode,
    pub strength: f32,
    pub softness: f32,
    pub distance: f32,
    pub scale: f32,
    /// Качество (число выборок фильтра)
    pub quality: f32,
    pub gray: f32,
    pub diffuse_influence: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            source_mode: ShadowLightMode::Weighted,
            strength: 1.0,
            softness: 0.55,
            distance: 1.0,
            scale: 1.0,
            quality: 0.65,
            gray: 0.0,
            diffuse_influence: 1.0,
        }
    }
}
