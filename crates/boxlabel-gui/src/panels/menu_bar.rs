use crate::app::LabelerApp;

pub fn show(ctx: &egui::Context, app: &mut LabelerApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        let enabled = !app.ui_state.is_blocked();
        egui::MenuBar::new().ui(ui, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.menu_button("File", |ui| {
                    let quit_shortcut =
                        egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                    if ui
                        .add(
                            egui::Button::new("Quit")
                                .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                        )
                        .clicked()
                    {
                        ui.close();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Go", |ui| {
                    if ui.button("First Image").clicked() {
                        ui.close();
                        app.jump_to(0);
                    }
                    if ui.button("Last Image").clicked() {
                        ui.close();
                        let last = app.session.image_count().saturating_sub(1);
                        app.jump_to(last);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close();
                        app.show_about = true;
                    }
                });
            });
        });

        // Consumed outside menus
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
