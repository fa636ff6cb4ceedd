use super::*;

fn collect_with_key_event(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        modifiers,
        ..Default::default()
    };
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_escape_emits_exit_intent() {
    let events = collect_with_key_event(egui::Key::Escape, egui::Modifiers::default());
    assert_eq!(events, vec![AppIntent::ExitRequested]);
}

#[test]
fn test_ctrl_q_emits_exit_intent() {
    let events = collect_with_key_event(egui::Key::Q, egui::Modifiers::COMMAND);
    assert_eq!(events, vec![AppIntent::ExitRequested]);
}

#[test]
fn test_plain_q_is_ignored() {
    let events = collect_with_key_event(egui::Key::Q, egui::Modifiers::default());
    assert!(events.is_empty());
}
