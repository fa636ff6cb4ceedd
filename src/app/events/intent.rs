use glam::Vec2;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Positionen liegen im Canvas-Koordinatensystem (Ursprung oben links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste im Canvas gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Anwendung beenden (Fenster schließen, Shortcut)
    ExitRequested,
}
