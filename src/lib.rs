//! Bézier Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppIntent, AppState, InteractionController, InteractionState};
pub use core::{
    derive_coefficients, evaluate, hit_test, sample_curve, CubicCoefficients, CurveError,
    CurveModel, HandleDefaults, HitTarget, Segment, HIT_TOLERANCE,
};
pub use shared::{EditorOptions, RenderScene};
