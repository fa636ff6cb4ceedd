//! Bézier Curve Editor.
//!
//! Interaktiver Editor für stückweise kubische Bézier-Kurven:
//! Klicken setzt Anker, Ziehen verschiebt Anker und Tangentenpunkte.

use bezier_curve_editor::{ui, AppIntent, AppState, EditorOptions, InteractionController};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let editor_options = EditorOptions::load_from_file(&EditorOptions::config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title(editor_options.window_title.clone()),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        let app_name = editor_options.window_title.clone();
        eframe::run_native(
            &app_name,
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: InteractionController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(editor_options),
            controller: InteractionController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        let mut has_meaningful_events = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let mut events = self.input.collect_canvas_events(ui, rect);
                if ctx.input(|i| i.viewport().close_requested()) {
                    events.push(AppIntent::ExitRequested);
                }
                has_meaningful_events = !events.is_empty();

                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);
            });

        if has_meaningful_events || self.state.should_exit {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
