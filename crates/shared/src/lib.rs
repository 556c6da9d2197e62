//! Типы предметной области редактора ручек: проект, свет, окружение,
//! кисти, параметры модели, материала и кольца, дерево сцены.

mod collar;
mod environment;
mod light;
mod material;
mod model;
mod paint;
mod project;
mod scene;

pub use collar::{CollarParams, CollarPreset};
pub use environment::{EnvironmentSettings, ShadowLightMode, ShadowSettings};
pub use light::{KnobLight, LightType, LightingMode};
pub use material::{MaterialParams, PartMaterial, PartMaterialOverrides};
pub use model::{GripStyle, IndicatorShape, ModelParams};
pub use paint::{
    PaintBrushSettings, PaintBrushType, PaintChannel, ScratchAbrasionType, ScratchSettings,
    SurfaceDetailSettings,
};
pub use project::KnobProject;
pub use scene::{CollarNode, MaterialNode, ModelNode, NodeKind, SceneGraph};

/// Уникальный идентификатор узла сцены
pub type NodeId = String;

/// Новый идентификатор узла (UUID v4)
pub fn new_node_id() -> NodeId {
    uuid::Uuid::new_v4().to_string()
}
