//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Fordert das kontrollierte Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
