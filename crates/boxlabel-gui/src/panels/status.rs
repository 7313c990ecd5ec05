use crate::app::LabelerApp;

pub fn show(ctx: &egui::Context, app: &mut LabelerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let view = app.session.view();
            let (disp_w, disp_h) = view.transform.display_size(view.width, view.height);
            ui.label(format!("{}x{}", view.width, view.height));
            ui.separator();
            ui.label(format!("Shown at {disp_w}x{disp_h}"));
            ui.separator();
            ui.label(format!("Scale: {:.0}%", view.transform.scale() * 100.0));
            if let Some(current) = app.session.current_box() {
                let r = current.ordered();
                ui.separator();
                ui.label(format!("Box: ({}, {}) - ({}, {})", r.x1, r.y1, r.x2, r.y2));
            }
        });

        ui.add_space(2.0);
    });
}
