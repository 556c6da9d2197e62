use serde::{Deserialize, Serialize};

use crate::{
    EnvironmentSettings, KnobLight, LightingMode, PaintBrushSettings, SceneGraph,
    ScratchSettings, ShadowSettings, SurfaceDetailSettings,
};

/// Проект ручки: всё изменяемое состояние предметной области
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobProject {
    pub lighting_mode: LightingMode,
    pub lights: Vec<KnobLight>,
    /// Индекс выбранного источника света (всегда в пределах списка, если он не пуст)
    #[serde(default)]
    pub selected_light_index: usize,
    pub environment: EnvironmentSettings,
    pub shadows: ShadowSettings,
    pub brush: PaintBrushSettings,
    pub scratch: ScratchSettings,
    #[serde(default)]
    pub surface: SurfaceDetailSettings,
    pub scene: SceneGraph,
}

impl Default for KnobProject {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::Realistic,
            lights: vec![KnobLight::default()],
            selected_light_index: 0,
            environment: EnvironmentSettings::default(),
            shadows: ShadowSettings::default(),
            brush: PaintBrushSettings::default(),
            scratch: ScratchSettings::default(),
            surface: SurfaceDetailSettings::default(),
            scene: SceneGraph::with_default_model(),
        }
    }
}

impl KnobProject {
    /// Выбранный источник света
    pub fn selected_light(&self) -> Option<&KnobLight> {
        self.lights.get(self.selected_light_index)
    }

    pub fn selected_light_mut(&mut self) -> Option<&mut KnobLight> {
        self.lights.get_mut(self.selected_light_index)
    }

    /// Установить выбранный источник. Индекс ограничивается размером списка.
    /// Возвращает true, если значение изменилось.
    pub fn set_selected_light_index(&mut self, index: usize) -> bool {
        let clamped = index.min(self.lights.len().saturating_sub(1));
        if clamped == self.selected_light_index {
            return false;
        }
        self.selected_light_index = clamped;
        true
    }

    /// Добавить источник света и сделать его выбранным
    pub fn add_light(&mut self) -> usize {
        let name = format!("Light {}", self.lights.len() + 1);
        self.lights.push(KnobLight::default_named(name));
        self.selected_light_index = self.lights.len() - 1;
        self.selected_light_index
    }

    /// Удалить источник света. Последний источник удалить нельзя.
    pub fn remove_light(&mut self, index: usize) -> bool {
        if self.lights.len() <= 1 || index >= self.lights.len() {
            return false;
        }
        self.lights.remove(index);
        // Keep pointing at the same light when an earlier one goes away
        if index < self.selected_light_index {
            self.selected_light_index -= 1;
        }
        self.clamp_selected_light();
        true
    }

    /// Гарантировать хотя бы один источник света
    pub fn ensure_light(&mut self) {
        if self.lights.is_empty() {
            self.lights.push(KnobLight::default());
            self.selected_light_index = 0;
        }
    }

    /// Ограничить индекс выбранного источника размером списка
    pub fn clamp_selected_light(&mut self) {
        let max = self.lights.len().saturating_sub(1);
        if self.selected_light_index > max {
            self.selected_light_index = max;
        }
    }
}
