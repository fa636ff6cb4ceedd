//! UI-Layer mit egui
//!
//! Zeichenfläche, Zeiger-Input, Keyboard-Shortcuts und Status-Bar.
//! Der UI-Layer erzeugt nur `AppIntent`s und liest die `RenderScene`;
//! er mutiert den App-State nie direkt.

pub mod canvas;
pub mod input;
mod keyboard;
pub mod status;

pub use canvas::paint_scene;
pub use input::InputState;
pub use status::render_status_bar;
