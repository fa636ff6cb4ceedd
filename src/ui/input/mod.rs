//! Zeichenflächen-Input: egui-Zeigerereignisse → AppIntent.
//!
//! Ein Tastendruck zählt nur innerhalb der Zeichenfläche. Solange die primäre
//! Taste gehalten wird, werden Bewegungen auch außerhalb weitergereicht;
//! verlässt der Zeiger das Fenster (`PointerGone`), gilt das als Loslassen.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verfolgt, ob die primäre Maustaste auf der Zeichenfläche gedrückt wurde.
#[derive(Debug, Default)]
pub struct InputState {
    primary_held: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade ein Drag mit der primären Taste läuft.
    pub fn is_primary_held(&self) -> bool {
        self.primary_held
    }

    /// Sammelt Zeichenflächen- und Keyboard-Events dieses Frames als AppIntents.
    pub fn collect_canvas_events(&mut self, ui: &egui::Ui, canvas: egui::Rect) -> Vec<AppIntent> {
        let raw_events = ui.input(|i| i.events.clone());

        let mut events = self.translate_pointer_events(&raw_events, canvas);
        events.extend(keyboard::collect_keyboard_intents(ui));
        events
    }

    /// Übersetzt rohe egui-Events in Zeiger-Intents mit Canvas-lokalen Koordinaten.
    pub fn translate_pointer_events(
        &mut self,
        raw_events: &[egui::Event],
        canvas: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        for event in raw_events {
            match *event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if !self.primary_held && canvas.contains(pos) {
                        self.primary_held = true;
                        events.push(AppIntent::PointerPressed {
                            pos: canvas_local(pos, canvas),
                        });
                    }
                }
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                }
                | egui::Event::PointerGone => {
                    if self.primary_held {
                        self.primary_held = false;
                        events.push(AppIntent::PointerReleased);
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    if self.primary_held {
                        events.push(AppIntent::PointerMoved {
                            pos: canvas_local(pos, canvas),
                        });
                    }
                }
                _ => {}
            }
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Koordinaten relativ zur Canvas-Ecke um.
pub fn canvas_local(pos: egui::Pos2, canvas: egui::Rect) -> Vec2 {
    let local = pos - canvas.min;
    Vec2::new(local.x, local.y)
}
