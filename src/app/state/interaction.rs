use crate::core::HitTarget;

/// Zustandsmaschine der Zeiger-Interaktion.
///
/// Ein Drag ist nur aus `Dragging` heraus möglich; vor dem ersten Klick
/// existiert kein Ziel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Element gegriffen
    #[default]
    Idle,
    /// Element wird mit gedrückter Taste gezogen
    Dragging(HitTarget),
}

impl InteractionState {
    /// Aktuelles Drag-Ziel (falls vorhanden).
    pub fn drag_target(self) -> Option<HitTarget> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging(target) => Some(target),
        }
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }

    /// Text für die Status-Bar.
    pub fn status_text(self) -> String {
        match self {
            InteractionState::Idle => "Bereit".to_string(),
            InteractionState::Dragging(target) => format!("Ziehe {}", target.label()),
        }
    }
}
