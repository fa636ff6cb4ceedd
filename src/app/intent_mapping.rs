//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier wird die Zustandsmaschine aufgelöst: Der Hit-Test läuft genau einmal
//! pro Tastendruck, Bewegungen werden nur im Zustand `Dragging` weitergereicht.

use super::state::InteractionState;
use super::{AppCommand, AppIntent, AppState};
use crate::core::hit_test;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Ereignisse ohne Übergang im aktuellen Zustand ergeben eine leere Liste.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match (state.interaction, intent) {
        (_, AppIntent::ExitRequested) => vec![AppCommand::RequestExit],
        (InteractionState::Idle, AppIntent::PointerPressed { pos }) => {
            match hit_test(pos, &state.curve, state.options.hit_tolerance) {
                Some(target) => vec![AppCommand::BeginDrag { target }],
                None => vec![AppCommand::AppendAnchor { pos }],
            }
        }
        (InteractionState::Dragging(_), AppIntent::PointerMoved { pos }) => {
            vec![AppCommand::DragTo { pos }]
        }
        (InteractionState::Dragging(_), AppIntent::PointerReleased) => vec![AppCommand::EndDrag],
        (InteractionState::Dragging(_), AppIntent::PointerPressed { .. })
        | (InteractionState::Idle, AppIntent::PointerMoved { .. })
        | (InteractionState::Idle, AppIntent::PointerReleased) => vec![],
    }
}
