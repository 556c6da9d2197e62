mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::params`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use knob_gui_lib::params;
pub use knob_gui_lib::state;

use app::KnobApp;
use state::session::SessionFile;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knob_gui=info".into()),
        )
        .init();

    // Parse --project <path> argument
    let initial_project = parse_project_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("KnobForge: knob designer")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "knob-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(KnobApp::new(cc, initial_project)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_project_arg() -> Option<SessionFile> {
    let args: Vec<String> = std::env::args().collect();
    let index = args.iter().position(|a| a == "--project")?;
    let path = args.get(index + 1)?;
    match app::read_session_file(std::path::Path::new(path)) {
        Ok(file) => {
            tracing::info!("Loaded project from {path}");
            Some(file)
        }
        Err(e) => {
            tracing::error!("{e}");
            None
        }
    }
}
