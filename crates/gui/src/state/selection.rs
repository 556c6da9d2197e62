use shared::NodeId;

/// What the scene tree has selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionTarget {
    /// The scene root itself
    Root,
    /// A model, material, collar or light node
    Node(NodeId),
}

/// Scene tree selection (single select)
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<SelectionTarget>,
    /// Version counter for selection changes (for scene tree refresh)
    pub version: u64,
}

impl SelectionState {
    pub fn target(&self) -> Option<&SelectionTarget> {
        self.selected.as_ref()
    }

    /// Selected node id, if a node (not the root) is selected
    pub fn node(&self) -> Option<&NodeId> {
        match &self.selected {
            Some(SelectionTarget::Node(id)) => Some(id),
            _ => None,
        }
    }

    /// Check if a node is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.node().is_some_and(|n| n == id)
    }

    pub fn is_root_selected(&self) -> bool {
        matches!(self.selected, Some(SelectionTarget::Root))
    }

    /// Select a node (clears previous selection)
    pub fn select_node(&mut self, id: NodeId) {
        self.set_target(Some(SelectionTarget::Node(id)));
    }

    pub fn select_root(&mut self) {
        self.set_target(Some(SelectionTarget::Root));
    }

    /// Replace the selection; bumps the version only on change
    pub fn set_target(&mut self, target: Option<SelectionTarget>) {
        if self.selected != target {
            self.selected = target;
            self.version += 1;
        }
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.set_target(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.target().is_none());
        assert!(s.node().is_none());
        assert_eq!(s.version, 0);
    }

    #[test]
    fn test_select_node() {
        let mut s = SelectionState::default();
        s.select_node("a".to_string());
        assert!(s.is_selected("a"));
        assert!(!s.is_selected("b"));
        assert!(!s.is_root_selected());
    }

    #[test]
    fn test_select_clears_previous() {
        let mut s = SelectionState::default();
        s.select_node("a".to_string());
        s.select_node("b".to_string());
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_root_is_not_a_node() {
        let mut s = SelectionState::default();
        s.select_root();
        assert!(s.is_root_selected());
        assert!(s.node().is_none());
    }

    #[test]
    fn test_version_bumps_only_on_change() {
        let mut s = SelectionState::default();
        s.select_node("a".to_string());
        s.select_node("a".to_string());
        assert_eq!(s.version, 1);
        s.clear();
        s.clear();
        assert_eq!(s.version, 2);
    }
}
