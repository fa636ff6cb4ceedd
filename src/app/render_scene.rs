//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{CurveModel, HitTarget};
use crate::shared::{HandleGuide, HandleKind, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die komplette Kurve wird jedes Frame neu abgetastet.
pub fn build(state: &AppState) -> RenderScene {
    let curve = &state.curve;
    let options = &state.options;

    let segments = curve
        .segments()
        .map(|seg| seg.sample(options.samples_per_segment).collect())
        .collect();

    let active_position = state
        .interaction
        .drag_target()
        .and_then(|target| target_position(curve, target));

    RenderScene {
        segments,
        anchors: curve.anchors().to_vec(),
        guides: collect_guides(curve, options.show_unused_handles),
        active_position,
        options: options.clone(),
    }
}

/// Führungslinien für alle Tangentenpunkte, die ein Segment speisen.
///
/// Der Rückwärts-Punkt des ersten und der Vorwärts-Punkt des letzten Ankers
/// werden nur mit `show_unused` gezeichnet.
fn collect_guides(curve: &CurveModel, show_unused: bool) -> Vec<HandleGuide> {
    let n = curve.len();
    let mut guides = Vec::with_capacity(n * 2);

    for (i, &anchor) in curve.anchors().iter().enumerate() {
        if show_unused || i + 1 < n {
            guides.push(HandleGuide {
                anchor,
                handle: curve.forward_handles()[i],
                kind: HandleKind::Forward,
            });
        }
        if show_unused || i > 0 {
            guides.push(HandleGuide {
                anchor,
                handle: curve.backward_handles()[i],
                kind: HandleKind::Backward,
            });
        }
    }

    guides
}

fn target_position(curve: &CurveModel, target: HitTarget) -> Option<glam::Vec2> {
    match target {
        HitTarget::Anchor(i) => curve.anchor(i).ok(),
        HitTarget::ForwardHandle(i) => curve.forward_handle(i).ok(),
        HitTarget::BackwardHandle(i) => curve.backward_handle(i).ok(),
    }
}
