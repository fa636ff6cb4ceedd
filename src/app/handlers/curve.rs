//! Handler für Kurven-Editing: Anker anhängen, Drag-Lifecycle.

use crate::app::state::InteractionState;
use crate::app::AppState;
use crate::core::{CurveError, HitTarget};
use glam::Vec2;

/// Hängt einen neuen Anker an die Kurve an.
pub fn append_anchor(state: &mut AppState, pos: Vec2) {
    state.curve.append_anchor(pos);

    if log::log_enabled!(log::Level::Debug) {
        let last_segment = state.curve.segment_count().checked_sub(1);
        if let Some(seg) = last_segment.and_then(|i| state.curve.segment(i).ok()) {
            log::debug!("Neues Segment:\n{}", seg.coefficients());
        }
    }
}

/// Greift ein Element für den folgenden Drag.
pub fn begin_drag(state: &mut AppState, target: HitTarget) {
    state.interaction = InteractionState::Dragging(target);
    log::debug!("Drag gestartet: {}", target.label());
}

/// Setzt das gegriffene Element auf `pos`. Ohne aktiven Drag ein No-op.
pub fn drag_to(state: &mut AppState, pos: Vec2) -> Result<(), CurveError> {
    let Some(target) = state.interaction.drag_target() else {
        return Ok(());
    };

    match target {
        HitTarget::Anchor(i) => state.curve.move_anchor(i, pos),
        HitTarget::ForwardHandle(i) => state.curve.move_forward_handle(i, pos),
        HitTarget::BackwardHandle(i) => state.curve.move_backward_handle(i, pos),
    }
}

/// Lässt das gegriffene Element los.
pub fn end_drag(state: &mut AppState) {
    if let Some(target) = state.interaction.drag_target() {
        log::debug!("Drag beendet: {}", target.label());
    }
    state.interaction = InteractionState::Idle;
}
