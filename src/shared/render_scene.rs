//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;

/// Seite eines Tangentenpunkts relativ zu seinem Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Ausgehende Tangente (Segment i → i+1)
    Forward,
    /// Eingehende Tangente (Segment i−1 → i)
    Backward,
}

/// Führungslinie vom Anker zu einem seiner Tangentenpunkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGuide {
    pub anchor: Vec2,
    pub handle: Vec2,
    pub kind: HandleKind,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Abgetastete Polylinie je Segment (Durchlaufreihenfolge)
    pub segments: Vec<Vec<Vec2>>,
    /// Alle Ankerpunkte
    pub anchors: Vec<Vec2>,
    /// Sichtbare Tangentenpunkte samt Führungslinie
    pub guides: Vec<HandleGuide>,
    /// Position des gerade gezogenen Elements (für Hervorhebung)
    pub active_position: Option<Vec2>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob mindestens ein Anker gezeichnet werden muss.
    pub fn has_curve(&self) -> bool {
        !self.anchors.is_empty()
    }
}
