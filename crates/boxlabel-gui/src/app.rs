use boxlabel_core::error::LabelerError;
use boxlabel_core::images::load_display_image;
use boxlabel_core::session::AnnotationSession;

use crate::convert::rgba_to_color_image;
use crate::panels;
use crate::states::{UIState, ViewportState, Warning};

pub struct LabelerApp {
    pub session: AnnotationSession,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl LabelerApp {
    pub fn new(session: AnnotationSession) -> Self {
        let mut ui_state = UIState::default();
        let ws = session.workspace();
        ui_state.add_log(format!(
            "{} images, {} classes, labels in {}",
            ws.images.len(),
            ws.classes.len(),
            ws.config.labels_dir.display()
        ));
        if !session.status().is_empty() {
            ui_state.add_log(session.status().to_string());
        }

        Self {
            session,
            ui_state,
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Decode the current image when the session has moved to a new one.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let view = self.session.view();
        if self.viewport.loaded_path.as_deref() == Some(view.path.as_path()) {
            return;
        }

        match load_display_image(&view.path, &view.transform) {
            Ok(img) => {
                let image = rgba_to_color_image(&img);
                self.viewport.texture =
                    Some(ctx.load_texture("canvas", image, egui::TextureOptions::LINEAR));
            }
            Err(err) => {
                tracing::error!("Failed to decode {}: {err}", view.path.display());
                self.ui_state
                    .add_log(format!("ERROR: {}: {err}", view.file_name()));
                self.viewport.texture = None;
            }
        }
        self.viewport.loaded_path = Some(view.path.clone());
    }

    pub fn save(&mut self) {
        match self.session.save() {
            Ok(outcome) => {
                self.ui_state
                    .add_log(format!("Saved: {}", outcome.label_path.display()));
                if let Some(err) = outcome.advance_error {
                    tracing::error!("{err}");
                    self.ui_state.add_log(format!("ERROR: next image: {err}"));
                } else if !outcome.advanced {
                    self.ui_state.add_log("Last image reached".into());
                }
                self.log_loaded_label();
            }
            Err(err) => self.report(err),
        }
    }

    pub fn prev(&mut self) {
        match self.session.prev() {
            Ok(true) => self.log_loaded_label(),
            Ok(false) => {}
            Err(err) => self.report(err),
        }
    }

    pub fn next(&mut self) {
        match self.session.next() {
            Ok(true) => self.log_loaded_label(),
            Ok(false) => {}
            Err(err) => self.report(err),
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if index == self.session.index() {
            return;
        }
        match self.session.load(index) {
            Ok(()) => self.log_loaded_label(),
            Err(err) => self.report(err),
        }
    }

    pub fn clear_box(&mut self) {
        let had_box = self.session.current_box().is_some();
        self.session.clear_box();
        if had_box {
            self.ui_state.add_log(self.session.status().to_string());
        }
    }

    fn log_loaded_label(&mut self) {
        let status = self.session.status();
        if status.starts_with("Loaded") {
            let msg = format!("{}: {status}", self.session.view().file_name());
            self.ui_state.add_log(msg);
        }
    }

    fn report(&mut self, err: LabelerError) {
        if let Some(warning) = Warning::from_error(&err) {
            self.ui_state.warning = Some(warning);
        } else {
            tracing::error!("{err}");
            self.ui_state.add_log(format!("ERROR: {err}"));
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let pressed =
            |key| ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));

        if pressed(egui::Key::S) {
            self.save();
        } else if pressed(egui::Key::N) {
            self.next();
        } else if pressed(egui::Key::P) {
            self.prev();
        } else if pressed(egui::Key::C) {
            self.clear_box();
        }
    }

    fn show_warning(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.ui_state.warning.as_ref() else {
            return;
        };

        let mut dismissed = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
        });
        egui::Window::new(warning.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(warning.message.as_str());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.ui_state.warning = None;
        }
    }
}

impl eframe::App for LabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.ui_state.is_blocked() {
            self.handle_shortcuts(ctx);
        }
        self.refresh_texture(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::canvas::show(ctx, self);

        self.show_warning(ctx);

        if self.show_about {
            egui::Window::new("About Box Labeler")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Box Labeler");
                        ui.label("Single-box YOLO annotation");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
