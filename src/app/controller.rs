//! Interaction Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;
use anyhow::Context;

/// Orchestriert Zeiger-Events und Kurven-Mutationen auf den AppState.
#[derive(Default)]
pub struct InteractionController;

impl InteractionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::AppendAnchor { pos } => handlers::curve::append_anchor(state, pos),
            AppCommand::BeginDrag { target } => handlers::curve::begin_drag(state, target),
            AppCommand::DragTo { pos } => handlers::curve::drag_to(state, pos)
                .with_context(|| format!("Drag auf ({:.1}, {:.1}) fehlgeschlagen", pos.x, pos.y))?,
            AppCommand::EndDrag => handlers::curve::end_drag(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
