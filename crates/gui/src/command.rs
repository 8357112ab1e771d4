//! JSON command protocol for scripted sessions.
//!
//! Each command maps onto one core entry point of the harness.

use serde::{Deserialize, Serialize};
use shared::Plane;

use crate::format::format_components;
use crate::harness::TestHarness;

/// A command a script can execute
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Switch the visible plane
    SelectPlane { plane: Plane },
    /// Submit raw editor fields for a new vector
    AddVector { fields: Vec<String> },
    /// Delete a vector by ID
    DeleteVector { id: String },
    /// Delete the primary selection
    DeleteSelected,
    /// Tap a vector, optionally with the compare-modifier held
    Tap {
        id: String,
        #[serde(default)]
        modifier: bool,
    },
    /// Clear selection.
    ClearSelection,
    /// Describe the primary selection.
    Describe,
    /// Inspect the plane: list all vectors.
    Inspect,
    /// Render one frame and report command counts
    Render,
    /// Export the active plane as JSON.
    ExportPlane,
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

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: ScriptCommand) -> CommandResponse {
    match cmd {
        ScriptCommand::SelectPlane { plane } => {
            harness.switch_plane(plane);
            CommandResponse::ok()
        }

        ScriptCommand::AddVector { fields } => match harness.state.submit_new_vector(&fields) {
            Ok(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        ScriptCommand::DeleteVector { id } => {
            let removed = harness.delete(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        ScriptCommand::DeleteSelected => {
            let removed = harness.delete_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        ScriptCommand::Tap { id, modifier } => {
            let snap = harness.state.handle_tap(&id, &modifier);
            CommandResponse::ok_with_data(serde_json::json!({
                "primary": snap.primary,
                "secondary": snap.secondary,
            }))
        }

        ScriptCommand::ClearSelection => {
            harness.state.clear_selection();
            CommandResponse::ok()
        }

        ScriptCommand::Describe => {
            CommandResponse::ok_with_data(serde_json::json!({ "text": harness.describe() }))
        }

        ScriptCommand::Inspect => {
            let vectors: Vec<serde_json::Value> = harness
                .vectors()
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "id": v.id,
                        "name": v.name,
                        "components": v.components.to_vec(),
                        "display": format_components(&v.components),
                        "unit": v.is_unit_vector,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "plane": harness.plane(),
                "vector_count": vectors.len(),
                "vectors": vectors,
            }))
        }

        ScriptCommand::Render => {
            let commands = harness.render();
            let lines = commands
                .iter()
                .filter(|c| matches!(c, crate::render::DrawCommand::Line { .. }))
                .count();
            let labels = commands.len() - lines;
            CommandResponse::ok_with_data(serde_json::json!({
                "lines": lines,
                "labels": labels,
            }))
        }

        ScriptCommand::ExportPlane => {
            let json = harness.export_plane_json();
            CommandResponse::ok_with_data(serde_json::json!({ "plane_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: ScriptCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<ScriptCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
