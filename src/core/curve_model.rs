//! Kurvenmodell: geordnete Ankerpunkte mit je einem Tangenten-Paar.
//!
//! Die drei parallelen Listen (Anker, Vorwärts-, Rückwärts-Tangentenpunkte)
//! sind privat und wachsen nur gemeinsam. Zwei Invarianten gelten:
//!
//! - **Spiegelung:** `backward[i] = anchor[i] - (forward[i] - anchor[i])` nach
//!   jeder Tangenten-Bearbeitung.
//! - **Starre Verschiebung:** Beim Verschieben eines Ankers wandern beide
//!   Tangentenpunkte um dasselbe Delta mit.

use super::curve_math::Segment;
use super::error::CurveError;
use glam::Vec2;

/// Tangenten-Länge entlang x beim Anhängen (relativ zur Richtung zum Vorgänger).
pub const HANDLE_ALONG_X: f32 = 100.0;
/// Tangenten-Länge entlang y beim Anhängen (halbe Länge von x).
pub const HANDLE_ALONG_Y: f32 = 50.0;
/// Diagonaler Versatz der Tangentenpunkte ohne Vorgänger-Richtung.
pub const HANDLE_INITIAL_OFFSET: f32 = 5.0;

/// Standard-Platzierung der Tangentenpunkte für neu angehängte Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDefaults {
    /// Skalierung der Richtungskomponente x
    pub along_x: f32,
    /// Skalierung der Richtungskomponente y
    pub along_y: f32,
    /// Diagonaler Versatz für den ersten Anker bzw. bei Nulldistanz
    pub initial_offset: f32,
}

impl Default for HandleDefaults {
    fn default() -> Self {
        Self {
            along_x: HANDLE_ALONG_X,
            along_y: HANDLE_ALONG_Y,
            initial_offset: HANDLE_INITIAL_OFFSET,
        }
    }
}

impl HandleDefaults {
    /// Berechnet `(forward, backward)` für einen neuen Anker bei `pos`.
    ///
    /// Mit Vorgänger zeigt die Tangente in Richtung `pos - prev`, gedämpft
    /// im Verhältnis `along_x : along_y`. Ohne Vorgänger oder bei Nulldistanz
    /// wird der diagonale Versatz verwendet.
    pub fn place(&self, prev: Option<Vec2>, pos: Vec2) -> (Vec2, Vec2) {
        let fallback = Vec2::splat(self.initial_offset);
        let Some(prev) = prev else {
            return (pos + fallback, pos - fallback);
        };

        let d = pos - prev;
        let dist = d.length();
        if dist <= f32::EPSILON {
            log::debug!(
                "Anker bei ({:.1}, {:.1}) faellt mit Vorgaenger zusammen, verwende Standard-Versatz",
                pos.x,
                pos.y
            );
            return (pos + fallback, pos - fallback);
        }

        let offset = Vec2::new(self.along_x * d.x / dist, self.along_y * d.y / dist);
        (pos + offset, pos - offset)
    }
}

/// Geordnete Ankerpunkt-Sequenz mit gespiegelten Tangenten-Paaren.
#[derive(Debug, Clone, Default)]
pub struct CurveModel {
    anchors: Vec<Vec2>,
    forward: Vec<Vec2>,
    backward: Vec<Vec2>,
    defaults: HandleDefaults,
}

impl CurveModel {
    /// Erstellt ein leeres Modell mit Standard-Tangentenplatzierung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Modell mit konfigurierter Tangentenplatzierung.
    pub fn with_handle_defaults(defaults: HandleDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn handle_defaults(&self) -> HandleDefaults {
        self.defaults
    }

    /// Anzahl der Ankerpunkte.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Gibt `true` zurück, wenn noch kein Anker gesetzt wurde.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anzahl der kubischen Segmente (n − 1, 0 bei weniger als zwei Ankern).
    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    /// Hängt einen neuen Anker an und setzt seine Standard-Tangenten.
    pub fn append_anchor(&mut self, pos: Vec2) {
        let (forward, backward) = self.defaults.place(self.anchors.last().copied(), pos);
        self.anchors.push(pos);
        self.forward.push(forward);
        self.backward.push(backward);
        log::debug!(
            "Anker {} angehaengt bei ({:.1}, {:.1})",
            self.anchors.len() - 1,
            pos.x,
            pos.y
        );
    }

    /// Verschiebt Anker `index` samt Tangentenpunkten auf `new_pos`.
    pub fn move_anchor(&mut self, index: usize, new_pos: Vec2) -> Result<(), CurveError> {
        let delta = new_pos - self.anchor(index)?;
        self.anchors[index] = new_pos;
        self.forward[index] += delta;
        self.backward[index] += delta;
        Ok(())
    }

    /// Setzt den Vorwärts-Tangentenpunkt und spiegelt den Rückwärts-Punkt.
    pub fn move_forward_handle(&mut self, index: usize, new_pos: Vec2) -> Result<(), CurveError> {
        let anchor = self.anchor(index)?;
        self.forward[index] = new_pos;
        self.backward[index] = mirror(anchor, new_pos);
        Ok(())
    }

    /// Setzt den Rückwärts-Tangentenpunkt und spiegelt den Vorwärts-Punkt.
    pub fn move_backward_handle(&mut self, index: usize, new_pos: Vec2) -> Result<(), CurveError> {
        let anchor = self.anchor(index)?;
        self.backward[index] = new_pos;
        self.forward[index] = mirror(anchor, new_pos);
        Ok(())
    }

    pub fn anchor(&self, index: usize) -> Result<Vec2, CurveError> {
        self.get(&self.anchors, index)
    }

    pub fn forward_handle(&self, index: usize) -> Result<Vec2, CurveError> {
        self.get(&self.forward, index)
    }

    pub fn backward_handle(&self, index: usize) -> Result<Vec2, CurveError> {
        self.get(&self.backward, index)
    }

    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    pub fn forward_handles(&self) -> &[Vec2] {
        &self.forward
    }

    pub fn backward_handles(&self) -> &[Vec2] {
        &self.backward
    }

    /// Segment `index` verbindet Anker `index` mit Anker `index + 1`.
    pub fn segment(&self, index: usize) -> Result<Segment, CurveError> {
        if index >= self.segment_count() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.segment_count(),
            });
        }
        Ok(self.segment_at(index))
    }

    /// Alle Segmente in Durchlaufreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.segment_count()).map(move |i| self.segment_at(i))
    }

    fn segment_at(&self, index: usize) -> Segment {
        Segment {
            p0: self.anchors[index],
            p1: self.anchors[index + 1],
            g0: self.forward[index],
            g1: self.backward[index + 1],
        }
    }

    fn get(&self, list: &[Vec2], index: usize) -> Result<Vec2, CurveError> {
        list.get(index)
            .copied()
            .ok_or(CurveError::IndexOutOfRange {
                index,
                len: self.anchors.len(),
            })
    }
}

/// Spiegelt `point` am `center`.
fn mirror(center: Vec2, point: Vec2) -> Vec2 {
    center - (point - center)
}
