// Library crate: exposes testable modules for integration tests and the JSON command interface.
// GUI-specific modules (app, ui, preview painting) remain in the binary crate.

pub mod command;
pub mod fixtures;
pub mod harness;
pub mod params;
pub mod state;

/// Viewport contract and the in-memory paint viewport.
/// Painting the preview with egui stays in the binary crate.
pub mod viewport {
    pub mod host;
    pub mod preview;
}
