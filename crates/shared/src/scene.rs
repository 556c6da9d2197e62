use serde::{Deserialize, Serialize};

use crate::{new_node_id, CollarParams, MaterialParams, ModelParams, NodeId};

/// Узел материала (дочерний узел модели)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialNode {
    #[serde(default = "new_node_id")]
    pub id: NodeId,
    pub name: String,
    pub params: MaterialParams,
}

impl Default for MaterialNode {
    fn default() -> Self {
        Self {
            id: new_node_id(),
            name: "Material".to_string(),
            params: MaterialParams::default(),
        }
    }
}

/// Узел кольца (дочерний узел модели)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollarNode {
    #[serde(default = "new_node_id")]
    pub id: NodeId,
    pub name: String,
    pub params: CollarParams,
}

impl Default for CollarNode {
    fn default() -> Self {
        Self {
            id: new_node_id(),
            name: "Collar".to_string(),
            params: CollarParams::default(),
        }
    }
}

/// Узел процедурной модели ручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelNode {
    #[serde(default = "new_node_id")]
    pub id: NodeId,
    pub name: String,
    pub params: ModelParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collar: Option<CollarNode>,
}

impl Default for ModelNode {
    fn default() -> Self {
        Self {
            id: new_node_id(),
            name: "Knob".to_string(),
            params: ModelParams::default(),
            material: Some(MaterialNode::default()),
            collar: None,
        }
    }
}

/// Тип узла сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Model,
    Material,
    Collar,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Model => "Model",
            NodeKind::Material => "Material",
            NodeKind::Collar => "Collar",
        }
    }
}

/// Дерево сцены: корень с моделью, у модели материал и кольцо
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    /// Идентификатор корня сцены (стабилен на всё время жизни проекта)
    #[serde(default = "new_node_id")]
    pub root_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelNode>,
}

impl Default for SceneGraph {
    /// Пустая сцена: только корень
    fn default() -> Self {
        Self {
            root_id: new_node_id(),
            model: None,
        }
    }
}

impl SceneGraph {
    /// Сцена с моделью и материалом по умолчанию
    pub fn with_default_model() -> Self {
        Self {
            root_id: new_node_id(),
            model: Some(ModelNode::default()),
        }
    }

    pub fn model(&self) -> Option<&ModelNode> {
        self.model.as_ref()
    }

    pub fn material(&self) -> Option<&MaterialNode> {
        self.model.as_ref()?.material.as_ref()
    }

    pub fn collar(&self) -> Option<&CollarNode> {
        self.model.as_ref()?.collar.as_ref()
    }

    pub fn collar_mut(&mut self) -> Option<&mut CollarNode> {
        self.model.as_mut()?.collar.as_mut()
    }

    /// Получить узел модели, создав его при отсутствии
    pub fn ensure_model(&mut self) -> &mut ModelNode {
        self.model.get_or_insert_with(|| ModelNode {
            material: None,
            ..ModelNode::default()
        })
    }

    /// Получить узел материала, создав модель и материал при отсутствии
    pub fn ensure_material(&mut self) -> &mut MaterialNode {
        self.ensure_model()
            .material
            .get_or_insert_with(MaterialNode::default)
    }

    /// Получить узел кольца, создав его при отсутствии
    pub fn ensure_collar(&mut self) -> &mut CollarNode {
        self.ensure_model()
            .collar
            .get_or_insert_with(CollarNode::default)
    }

    /// Удалить кольцо. Возвращает true, если узел существовал
    pub fn remove_collar(&mut self) -> bool {
        self.model
            .as_mut()
            .and_then(|m| m.collar.take())
            .is_some()
    }

    /// Определить тип узла модели/материала/кольца по идентификатору
    pub fn node_kind(&self, id: &str) -> Option<NodeKind> {
        let model = self.model.as_ref()?;
        if model.id == id {
            return Some(NodeKind::Model);
        }
        if model.material.as_ref().is_some_and(|m| m.id == id) {
            return Some(NodeKind::Material);
        }
        if model.collar.as_ref().is_some_and(|c| c.id == id) {
            return Some(NodeKind::Collar);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_material_creates_model() {
        let mut scene = SceneGraph::default();
        assert!(scene.model().is_none());
        scene.ensure_material();
        assert!(scene.model().is_some());
        assert!(scene.material().is_some());
        assert!(scene.collar().is_none());
    }

    #[test]
    fn test_remove_collar() {
        let mut scene = SceneGraph::with_default_model();
        assert!(!scene.remove_collar());
        scene.ensure_collar();
        assert!(scene.collar().is_some());
        assert!(scene.remove_collar());
        assert!(scene.collar().is_none());
    }

    #[test]
    fn test_node_kind_lookup() {
        let mut scene = SceneGraph::with_default_model();
        let collar_id = scene.ensure_collar().id.clone();
        let model_id = scene.model().unwrap().id.clone();
        let material_id = scene.material().unwrap().id.clone();

        assert_eq!(scene.node_kind(&model_id), Some(NodeKind::Model));
        assert_eq!(scene.node_kind(&material_id), Some(NodeKind::Material));
        assert_eq!(scene.node_kind(&collar_id), Some(NodeKind::Collar));
        assert_eq!(scene.node_kind("missing"), None);
    }
}
