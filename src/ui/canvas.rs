//! Zeichnen der RenderScene mit dem egui-Painter.

use crate::shared::{HandleKind, RenderScene};
use glam::Vec2;

/// Linienstärke der Tangenten-Führungslinien.
const GUIDE_STROKE_WIDTH: f32 = 1.0;
/// Radius-Faktor des Markierungsrings um das gezogene Element.
const ACTIVE_RING_FACTOR: f32 = 2.5;

/// Zeichnet Hintergrund, Kurve, Führungslinien, Tangentenpunkte und Anker.
///
/// Reihenfolge: Kurve unten, Anker oben, damit übereinanderliegende
/// Tangentenpunkte den Anker nicht verdecken.
pub fn paint_scene(painter: &egui::Painter, canvas: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    painter.rect_filled(canvas, 0.0, to_color32(options.background_color));

    let curve_stroke = egui::Stroke::new(options.curve_stroke_width, to_color32(options.curve_color));
    for polyline in &scene.segments {
        let points = polyline.iter().map(|&p| to_screen(canvas, p)).collect();
        painter.add(egui::Shape::line(points, curve_stroke));
    }

    for guide in &scene.guides {
        let (guide_color, handle_color) = match guide.kind {
            HandleKind::Forward => (options.forward_guide_color, options.forward_handle_color),
            HandleKind::Backward => (options.backward_guide_color, options.backward_handle_color),
        };
        let handle = to_screen(canvas, guide.handle);
        painter.line_segment(
            [to_screen(canvas, guide.anchor), handle],
            egui::Stroke::new(GUIDE_STROKE_WIDTH, to_color32(guide_color)),
        );
        painter.circle_filled(handle, options.point_radius, to_color32(handle_color));
    }

    let anchor_color = to_color32(options.anchor_color);
    for &anchor in &scene.anchors {
        painter.circle_filled(to_screen(canvas, anchor), options.point_radius, anchor_color);
    }

    if let Some(active) = scene.active_position {
        painter.circle_stroke(
            to_screen(canvas, active),
            options.point_radius * ACTIVE_RING_FACTOR,
            egui::Stroke::new(GUIDE_STROKE_WIDTH, anchor_color),
        );
    }
}

/// Canvas-lokale Koordinaten → Bildschirmposition.
fn to_screen(canvas: egui::Rect, p: Vec2) -> egui::Pos2 {
    canvas.min + egui::vec2(p.x, p.y)
}

/// RGBA-Float-Farbe (0..1) → egui-Farbe.
fn to_color32(c: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(channel(c[0]), channel(c[1]), channel(c[2]), channel(c[3]))
}
