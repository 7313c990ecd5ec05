use boxlabel_core::classes::ClassId;

use crate::app::LabelerApp;
use crate::panels::section_header;

const RIGHT_PANEL_WIDTH: f32 = 320.0;

pub fn show(ctx: &egui::Context, app: &mut LabelerApp) {
    egui::SidePanel::right("controls")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            let enabled = !app.ui_state.is_blocked();
            ui.add_enabled_ui(enabled, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);

                    image_section(ui, app);
                    ui.separator();
                    class_section(ui, app);
                    ui.separator();
                    actions_section(ui, app);
                    ui.separator();
                    status_section(ui, app);
                });
            });
        });
}

fn image_section(ui: &mut egui::Ui, app: &LabelerApp) {
    let session = &app.session;
    let counter = format!("Image {}/{}", session.index() + 1, session.image_count());
    section_header(ui, "Image", Some(counter.as_str()));

    let view = session.view();
    ui.label(view.file_name());
    ui.label(format!("{}x{}", view.width, view.height));
    ui.small(format!("Label: {}", session.label_path().display()));
}

fn class_section(ui: &mut egui::Ui, app: &mut LabelerApp) {
    let selected = app.session.selected_class();
    let status = selected
        .and_then(|id| app.session.classes().name(id))
        .unwrap_or("none");
    section_header(ui, "Class", Some(status));

    let mut toggled: Option<ClassId> = None;
    for (id, name) in app.session.classes().iter() {
        let text = format!("{id}: {name}");
        if ui.selectable_label(selected == Some(id), text).clicked() {
            toggled = Some(id);
        }
    }

    if let Some(id) = toggled {
        app.session.toggle_class(id);
    }
}

fn actions_section(ui: &mut egui::Ui, app: &mut LabelerApp) {
    section_header(ui, "Actions", None);

    let full_width = ui.available_width();
    let wide = egui::vec2(full_width, 0.0);

    if ui.add(egui::Button::new("Save (S)").min_size(wide)).clicked() {
        app.save();
    }
    if ui.add(egui::Button::new("Clear Box (C)").min_size(wide)).clicked() {
        app.clear_box();
    }
    ui.horizontal(|ui| {
        let half = (full_width - ui.spacing().item_spacing.x) / 2.0;
        let prev = egui::Button::new("Prev (P)").min_size(egui::vec2(half, 0.0));
        if ui
            .add_enabled(app.session.index() > 0, prev)
            .clicked()
        {
            app.prev();
        }
        let next = egui::Button::new("Next (N)").min_size(egui::vec2(half, 0.0));
        if ui
            .add_enabled(app.session.index() + 1 < app.session.image_count(), next)
            .clicked()
        {
            app.next();
        }
    });
}

fn status_section(ui: &mut egui::Ui, app: &LabelerApp) {
    section_header(ui, "Status", None);

    let status = app.session.status();
    if status.is_empty() {
        ui.weak("Drag on the image to draw a box.");
    } else {
        ui.label(status);
    }
}
