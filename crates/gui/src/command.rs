//! JSON command protocol for scripted editing sessions.

use serde::{Deserialize, Serialize};

use crate::harness::TestHarness;
use crate::params::ParamValue;
use crate::state::history::SceneSelectionSnapshot;
use crate::state::profile::{ProfileAction, ProfileError};
use crate::viewport::host::ViewportHost;

/// A command a script or agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Set a named parameter, e.g. `model.radius`
    SetParam { key: String, value: ParamValue },
    /// Read a named parameter
    GetParam { key: String },
    /// Undo the last change.
    Undo,
    /// Redo the last undone change.
    Redo,
    AddLight,
    RemoveLight { index: usize },
    SelectLight { index: usize },
    AddCollar,
    RemoveCollar,
    /// Select a scene-tree entry, e.g. `{"kind": "light", "index": 1}`
    Select { target: SceneSelectionSnapshot },
    /// Paint on the active layer with the current brush
    PaintStroke {
        position: [f32; 2],
        #[serde(default = "default_stroke_radius")]
        radius: f32,
    },
    SaveProfile { name: String },
    ApplyProfile { name: String },
    /// Needs to be sent twice within the confirmation window
    OverwriteProfile { name: String },
    RenameProfile { from: String, to: String },
    DuplicateProfile { from: String, to: String },
    /// Needs to be sent twice within the confirmation window
    DeleteProfile { name: String },
    ListProfiles,
    /// Summary of the session
    Inspect,
    /// Export the session as JSON.
    ExportState,
}

fn default_stroke_radius() -> f32 {
    16.0
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn profile_response(result: Result<ProfileAction, ProfileError>) -> CommandResponse {
    match result {
        Ok(action) => CommandResponse::ok_with_data(serde_json::json!({
            "done": action.is_mutation(),
            "message": action.to_string(),
        })),
        Err(err) => CommandResponse::err(err.to_string()),
    }
}

fn unit_response(result: Result<(), String>) -> CommandResponse {
    match result {
        Ok(()) => CommandResponse::ok(),
        Err(err) => CommandResponse::err(err),
    }
}

fn inspect(harness: &TestHarness) -> serde_json::Value {
    let session = &harness.session;
    let project = &session.project;
    let lights: Vec<serde_json::Value> = project
        .lights
        .iter()
        .map(|light| {
            serde_json::json!({
                "name": light.name,
                "type": light.light_type.as_str(),
                "intensity": light.intensity,
            })
        })
        .collect();
    let model = project.scene.model().map(|m| {
        serde_json::json!({
            "radius": m.params.radius,
            "height": m.params.height,
            "grip_style": m.params.grip_style.as_str(),
        })
    });
    serde_json::json!({
        "model": model,
        "has_material": project.scene.material().is_some(),
        "has_collar": project.scene.collar().is_some(),
        "lights": lights,
        "selected_light_index": project.selected_light_index,
        "selection": harness.selection(),
        "paint_revision": session.viewport.paint_history_revision(),
        "undo_count": session.history().undo_len(),
        "redo_count": session.history().redo_len(),
        "profiles": session.profiles().names(),
    })
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::SetParam { key, value } => match harness.set(&key, value) {
            Ok(changed) => CommandResponse::ok_with_data(serde_json::json!({ "changed": changed })),
            Err(err) => CommandResponse::err(err),
        },

        AgentCommand::GetParam { key } => match harness.get(&key) {
            Some(value) => CommandResponse::ok_with_data(serde_json::json!({ "value": value })),
            None => CommandResponse::err(format!("Parameter '{key}' is not available")),
        },

        AgentCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::AddLight => {
            let index = harness.add_light();
            CommandResponse::ok_with_data(serde_json::json!({ "index": index }))
        }

        AgentCommand::RemoveLight { index } => unit_response(harness.remove_light(index)),

        AgentCommand::SelectLight { index } => unit_response(harness.select_light(index)),

        AgentCommand::AddCollar => {
            let added = harness.add_collar();
            CommandResponse::ok_with_data(serde_json::json!({ "added": added }))
        }

        AgentCommand::RemoveCollar => {
            let removed = harness.remove_collar();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::Select { target } => {
            if harness.select(target) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": harness.selection() }))
            } else {
                CommandResponse::err("Nothing to select for that target")
            }
        }

        AgentCommand::PaintStroke { position, radius } => {
            let revision = harness.paint(position, radius);
            CommandResponse::ok_with_data(serde_json::json!({ "revision": revision }))
        }

        AgentCommand::SaveProfile { name } => profile_response(harness.save_profile(&name)),

        AgentCommand::ApplyProfile { name } => match harness.apply_profile(&name) {
            Ok(()) => CommandResponse::ok(),
            Err(err) => CommandResponse::err(err.to_string()),
        },

        AgentCommand::OverwriteProfile { name } => {
            profile_response(harness.overwrite_profile(&name))
        }

        AgentCommand::RenameProfile { from, to } => {
            profile_response(harness.rename_profile(&from, &to))
        }

        AgentCommand::DuplicateProfile { from, to } => {
            profile_response(harness.duplicate_profile(&from, &to))
        }

        AgentCommand::DeleteProfile { name } => profile_response(harness.delete_profile(&name)),

        AgentCommand::ListProfiles => {
            CommandResponse::ok_with_data(serde_json::json!({ "profiles": harness.profile_names() }))
        }

        AgentCommand::Inspect => CommandResponse::ok_with_data(inspect(harness)),

        AgentCommand::ExportState => {
            let json = harness.export_json();
            CommandResponse::ok_with_data(serde_json::json!({ "state_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
