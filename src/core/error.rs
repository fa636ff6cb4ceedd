//! Fehlertypen des Kurvenmodells.

use thiserror::Error;

/// Fehler bei Zugriffen auf das Kurvenmodell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Index liegt ausserhalb der aktuellen Ankerpunkt-Anzahl
    #[error("Ankerpunkt-Index {index} ausserhalb des gueltigen Bereichs (Anzahl: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
