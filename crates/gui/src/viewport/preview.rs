//! In-memory viewport used by the desktop preview and the headless harness.
//!
//! Paint strokes are kept as a linear list; the paint history revision is
//! the number of strokes currently applied. Restoring an older revision
//! hides later strokes without discarding them, so a redo can bring them
//! back. A new stroke after a rewind drops the hidden ones.

use serde::{Deserialize, Serialize};
use shared::PaintChannel;

use super::host::{PaintLayer, ViewportHost};

/// One recorded paint dab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStroke {
    pub layer: usize,
    pub channel: PaintChannel,
    /// Position in normalized texture space
    pub position: [f32; 2],
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreviewState {
    layers: Vec<PaintLayer>,
    active_layer: usize,
    #[serde(default)]
    focused_layer: Option<usize>,
    revision: u64,
    #[serde(default)]
    strokes: Vec<PaintStroke>,
}

#[derive(Debug, Clone)]
pub struct PreviewViewport {
    state: PreviewState,
    gpu_invalidations: u64,
}

impl Default for PreviewViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewViewport {
    pub fn new() -> Self {
        let layers = ["Base", "Weathering", "Details"]
            .into_iter()
            .map(|name| PaintLayer {
                name: name.to_string(),
                visible: true,
            })
            .collect();
        Self {
            state: PreviewState {
                layers,
                active_layer: 0,
                focused_layer: None,
                revision: 0,
                strokes: Vec::new(),
            },
            gpu_invalidations: 0,
        }
    }

    /// Record a stroke on the active layer and advance the revision
    pub fn paint_stroke(&mut self, channel: PaintChannel, position: [f32; 2], radius: f32) -> u64 {
        let applied = self.state.revision as usize;
        self.state.strokes.truncate(applied);
        self.state.strokes.push(PaintStroke {
            layer: self.state.active_layer,
            channel,
            position,
            radius,
        });
        self.state.revision = self.state.strokes.len() as u64;
        self.invalidate_gpu();
        self.state.revision
    }

    /// Strokes visible at the current revision
    pub fn applied_strokes(&self) -> &[PaintStroke] {
        &self.state.strokes[..self.state.revision as usize]
    }

    pub fn add_layer(&mut self, name: impl Into<String>) -> usize {
        self.state.layers.push(PaintLayer {
            name: name.into(),
            visible: true,
        });
        self.state.layers.len() - 1
    }

    /// How many times GPU state was invalidated (for refresh checks)
    pub fn gpu_invalidations(&self) -> u64 {
        self.gpu_invalidations
    }
}

impl ViewportHost for PreviewViewport {
    fn invalidate_gpu(&mut self) {
        self.gpu_invalidations += 1;
    }

    fn paint_layers(&self) -> &[PaintLayer] {
        &self.state.layers
    }

    fn active_paint_layer_index(&self) -> usize {
        self.state.active_layer
    }

    fn set_active_paint_layer_index(&mut self, index: usize) -> bool {
        let clamped = index.min(self.state.layers.len().saturating_sub(1));
        if clamped == self.state.active_layer {
            return false;
        }
        self.state.active_layer = clamped;
        true
    }

    fn focused_paint_layer_index(&self) -> Option<usize> {
        self.state.focused_layer
    }

    fn set_focused_paint_layer_index(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|i| *i < self.state.layers.len());
        if index == self.state.focused_layer {
            return false;
        }
        self.state.focused_layer = index;
        true
    }

    fn paint_history_revision(&self) -> u64 {
        self.state.revision
    }

    fn restore_paint_history_revision(&mut self, revision: u64) -> bool {
        let revision = revision.min(self.state.strokes.len() as u64);
        if revision == self.state.revision {
            return false;
        }
        self.state.revision = revision;
        self.invalidate_gpu();
        true
    }

    fn export_state(&self) -> serde_json::Value {
        serde_json::to_value(&self.state).unwrap_or(serde_json::Value::Null)
    }

    fn import_state(&mut self, state: &serde_json::Value) -> Result<(), String> {
        let mut imported: PreviewState = serde_json::from_value(state.clone())
            .map_err(|e| format!("Invalid viewport state: {e}"))?;
        if imported.layers.is_empty() {
            return Err("Viewport state has no paint layers".to_string());
        }
        imported.active_layer = imported.active_layer.min(imported.layers.len() - 1);
        imported.focused_layer = imported.focused_layer.filter(|i| *i < imported.layers.len());
        imported.revision = imported.revision.min(imported.strokes.len() as u64);
        self.state = imported;
        self.invalidate_gpu();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_layer_is_clamped() {
        let mut v = PreviewViewport::new();
        assert!(v.set_active_paint_layer_index(99));
        assert_eq!(v.active_paint_layer_index(), 2);
        assert!(!v.set_active_paint_layer_index(2));
    }

    #[test]
    fn test_focused_layer_out_of_range_clears() {
        let mut v = PreviewViewport::new();
        v.set_focused_paint_layer_index(Some(1));
        assert!(v.set_focused_paint_layer_index(Some(10)));
        assert_eq!(v.focused_paint_layer_index(), None);
    }

    #[test]
    fn test_revision_rewind_and_replay() {
        let mut v = PreviewViewport::new();
        v.paint_stroke(PaintChannel::Rust, [0.1, 0.1], 4.0);
        v.paint_stroke(PaintChannel::Gunk, [0.2, 0.2], 4.0);
        assert_eq!(v.paint_history_revision(), 2);

        assert!(v.restore_paint_history_revision(1));
        assert_eq!(v.applied_strokes().len(), 1);
        assert!(v.restore_paint_history_revision(2));
        assert_eq!(v.applied_strokes().len(), 2);
    }

    #[test]
    fn test_stroke_after_rewind_drops_hidden_strokes() {
        let mut v = PreviewViewport::new();
        v.paint_stroke(PaintChannel::Rust, [0.1, 0.1], 4.0);
        v.paint_stroke(PaintChannel::Rust, [0.2, 0.2], 4.0);
        v.restore_paint_history_revision(0);
        assert_eq!(v.paint_stroke(PaintChannel::Wear, [0.3, 0.3], 4.0), 1);
        assert!(!v.restore_paint_history_revision(2));
        assert_eq!(v.paint_history_revision(), 1);
    }

    #[test]
    fn test_export_import_state() {
        let mut v = PreviewViewport::new();
        v.set_active_paint_layer_index(1);
        v.paint_stroke(PaintChannel::Scratch, [0.5, 0.5], 2.0);
        let exported = v.export_state();

        let mut other = PreviewViewport::new();
        other.import_state(&exported).unwrap();
        assert_eq!(other.active_paint_layer_index(), 1);
        assert_eq!(other.paint_history_revision(), 1);
        assert_eq!(other.applied_strokes(), v.applied_strokes());
    }

    #[test]
    fn test_import_rejects_garbage() {
        let mut v = PreviewViewport::new();
        assert!(v.import_state(&serde_json::json!({"layers": 3})).is_err());
    }
}
