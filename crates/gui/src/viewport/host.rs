//! Contract between the editor state and the painting viewport.
//!
//! The viewport owns the GPU resources and the pixel content of the paint
//! layers. The editor only reads and restores layer indices and an opaque
//! paint history revision; it never stores pixels.

use serde::{Deserialize, Serialize};

/// One paint layer as the viewport enumerates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintLayer {
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

pub trait ViewportHost {
    /// Drop cached GPU state so the next frame rebuilds from the project
    fn invalidate_gpu(&mut self);

    fn paint_layers(&self) -> &[PaintLayer];

    fn active_paint_layer_index(&self) -> usize;

    /// Clamped into the layer list. Returns true if the value changed.
    fn set_active_paint_layer_index(&mut self, index: usize) -> bool;

    fn focused_paint_layer_index(&self) -> Option<usize>;

    /// Out-of-range indices clear the focus. Returns true if the value changed.
    fn set_focused_paint_layer_index(&mut self, index: Option<usize>) -> bool;

    /// Pointer into the viewport's own pixel-paint history
    fn paint_history_revision(&self) -> u64;

    /// Rewind or replay paint content to `revision`. Returns true if it moved.
    fn restore_paint_history_revision(&mut self, revision: u64) -> bool;

    /// Paint and viewport state for project persistence (opaque to the editor)
    fn export_state(&self) -> serde_json::Value;

    fn import_state(&mut self, state: &serde_json::Value) -> Result<(), String>;
}
