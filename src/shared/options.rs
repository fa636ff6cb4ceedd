//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle beim Start konfigurierbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::curve_model::{HANDLE_ALONG_X, HANDLE_ALONG_Y, HANDLE_INITIAL_OFFSET};
use crate::core::{HandleDefaults, HIT_TOLERANCE};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fensterbreite in Pixeln.
pub const WINDOW_WIDTH: f32 = 1500.0;
/// Standard-Fensterhöhe in Pixeln.
pub const WINDOW_HEIGHT: f32 = 900.0;
/// Fenstertitel.
pub const WINDOW_TITLE: &str = "Bezier Curves";

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Abtastschritte pro Segment (ergibt Schritte + 1 Punkte).
pub const SAMPLES_PER_SEGMENT: usize = 100;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 3.0;
/// Radius der Anker- und Tangentenpunkte in Pixeln.
pub const POINT_RADIUS: f32 = 3.0;

/// Hintergrundfarbe (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Kurvenfarbe (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Ankerfarbe (RGBA: Weiß).
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Vorwärts-Tangentenpunkte (RGBA: Rot).
pub const FORWARD_HANDLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Vorwärts-Führungslinie (RGBA: Hellrot).
pub const FORWARD_GUIDE_COLOR: [f32; 4] = [1.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];
/// Farbe der Rückwärts-Tangentenpunkte (RGBA: Blau).
pub const BACKWARD_HANDLE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe der Rückwärts-Führungslinie (RGBA: Hellblau).
pub const BACKWARD_GUIDE_COLOR: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Fenstertitel
    pub window_title: String,

    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Test-Toleranz (Manhattan-Distanz, Canvas-Einheiten)
    pub hit_tolerance: f32,
    /// Tangenten-Skalierung x beim Anhängen
    pub handle_along_x: f32,
    /// Tangenten-Skalierung y beim Anhängen
    pub handle_along_y: f32,
    /// Diagonaler Tangenten-Versatz ohne Vorgänger
    pub handle_initial_offset: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Abtastschritte pro Segment
    pub samples_per_segment: usize,
    /// Linienstärke der Kurve
    pub curve_stroke_width: f32,
    /// Punkt-Radius für Anker und Tangentenpunkte
    pub point_radius: f32,
    /// Auch Tangentenpunkte ohne Segment zeichnen (erster Rückwärts-, letzter Vorwärts-Punkt)
    pub show_unused_handles: bool,
    pub background_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub anchor_color: [f32; 4],
    pub forward_handle_color: [f32; 4],
    pub forward_guide_color: [f32; 4],
    pub backward_handle_color: [f32; 4],
    pub backward_guide_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_size: [WINDOW_WIDTH, WINDOW_HEIGHT],
            window_title: WINDOW_TITLE.to_string(),

            hit_tolerance: HIT_TOLERANCE,
            handle_along_x: HANDLE_ALONG_X,
            handle_along_y: HANDLE_ALONG_Y,
            handle_initial_offset: HANDLE_INITIAL_OFFSET,

            samples_per_segment: SAMPLES_PER_SEGMENT,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            point_radius: POINT_RADIUS,
            show_unused_handles: false,
            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            anchor_color: ANCHOR_COLOR,
            forward_handle_color: FORWARD_HANDLE_COLOR,
            forward_guide_color: FORWARD_GUIDE_COLOR,
            backward_handle_color: BACKWARD_HANDLE_COLOR,
            backward_guide_color: BACKWARD_GUIDE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen (Hit-Toleranz: {})", opts.hit_tolerance);
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Tangenten-Platzierung für neu angehängte Anker.
    pub fn handle_defaults(&self) -> HandleDefaults {
        HandleDefaults {
            along_x: self.handle_along_x,
            along_y: self.handle_along_y,
            initial_offset: self.handle_initial_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_relative_eq!(opts.hit_tolerance, 10.0);
        assert_eq!(opts.samples_per_segment, 100);
        assert_eq!(opts.window_title, "Bezier Curves");
        assert_eq!(opts.handle_defaults(), HandleDefaults::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = EditorOptions::from_toml_str("hit_tolerance = 15.0\nshow_unused_handles = true\n")
            .expect("Teil-TOML sollte parsebar sein");
        assert_relative_eq!(opts.hit_tolerance, 15.0);
        assert!(opts.show_unused_handles);
        assert_eq!(opts.window_size, [WINDOW_WIDTH, WINDOW_HEIGHT]);
    }

    #[test]
    fn test_handle_defaults_from_toml() {
        let opts = EditorOptions::from_toml_str(
            "handle_along_x = 40.0\nhandle_along_y = 40.0\nhandle_initial_offset = 2.0\n",
        )
        .expect("TOML sollte parsebar sein");
        let defaults = opts.handle_defaults();
        assert_relative_eq!(defaults.along_x, 40.0);
        assert_relative_eq!(defaults.along_y, 40.0);
        assert_relative_eq!(defaults.initial_offset, 2.0);
    }

    #[test]
    fn test_broken_toml_is_error() {
        assert!(EditorOptions::from_toml_str("hit_tolerance = \"weit\"").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("bezier_curve_editor_gibt_es_nicht.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "bezier_curve_editor_options_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "samples_per_segment = 20\n").expect("Schreiben fehlgeschlagen");

        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts.samples_per_segment, 20);
    }
}
