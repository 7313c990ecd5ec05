pub mod canvas;
pub mod controls;
pub mod menu_bar;
pub mod status;

/// Section title with an optional right-aligned note, followed by a small gap.
pub(crate) fn section_header(ui: &mut egui::Ui, title: &str, note: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).strong().size(15.0));
        if let Some(note) = note {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(note);
            });
        }
    });
    ui.add_space(4.0);
}
