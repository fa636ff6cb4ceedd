//! Core-Domänentypen: Kurvenmathematik, Kurvenmodell, Hit-Test.

pub mod curve_math;
/// Kurvenmodell mit Ankerpunkten und gespiegelten Tangenten-Paaren
///
/// Einzige Stelle, an der Anker- und Tangentenlisten mutiert werden:
/// - Anhängen mit Standard-Tangenten
/// - Anker starr verschieben
/// - Tangentenpunkt setzen und Gegenstück spiegeln
pub mod curve_model;
pub mod error;

pub use curve_math::{derive_coefficients, evaluate, sample_curve, CubicCoefficients, Segment};
pub use curve_model::{CurveModel, HandleDefaults};
pub use error::CurveError;
pub use hit_test::{hit_test, HitTarget, HIT_TOLERANCE};
