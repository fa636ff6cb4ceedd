use super::InteractionState;
use crate::app::CommandLog;
use crate::core::CurveModel;
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die bearbeitete Kurve (einzige Instanz, nur vom Controller mutiert)
    pub curve: CurveModel,
    /// Zustand der Zeiger-Interaktion
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Editor-Optionen (Toleranz, Tangenten-Defaults, Farben, Größen)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurveModel::with_handle_defaults(options.handle_defaults()),
            interaction: InteractionState::Idle,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Ankerpunkte zurück (für UI-Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.curve.len()
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.curve.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
