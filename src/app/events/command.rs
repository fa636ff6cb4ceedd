use crate::core::HitTarget;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Anker am Kurvenende anhängen
    AppendAnchor { pos: Vec2 },
    /// Drag auf einem getroffenen Element beginnen
    BeginDrag { target: HitTarget },
    /// Aktuelles Drag-Ziel auf Zeigerposition setzen
    DragTo { pos: Vec2 },
    /// Drag beenden, letzte Position bleibt bestehen
    EndDrag,
    /// Anwendung beenden
    RequestExit,
}
