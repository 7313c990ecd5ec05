use boxlabel_core::codec::{DisplayPoint, DisplayRect};

use crate::app::LabelerApp;

const BOX_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const BOX_WIDTH: f32 = 2.0;

pub fn show(ctx: &egui::Context, app: &mut LabelerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (canvas_w, canvas_h) = app.session.canvas_size();
        let size = egui::vec2(canvas_w as f32, canvas_h as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        paint_background(ui, rect);

        if let Some(ref texture) = app.viewport.texture {
            draw_image(ui, texture, image_rect(app, rect, texture));
        } else {
            show_placeholder(ui, rect);
        }

        if !app.ui_state.is_blocked() {
            handle_pointer(ctx, ui, &response, app, rect);
        }

        if let Some(current) = app.session.current_box() {
            draw_box(ui, &current, rect);
        }
    });
}

/// Convert a screen position to canvas pixels, flooring like the window system does.
pub fn screen_to_canvas(pos: egui::Pos2, canvas: egui::Rect) -> DisplayPoint {
    DisplayPoint::new(
        (pos.x - canvas.left()).floor() as i32,
        (pos.y - canvas.top()).floor() as i32,
    )
}

fn canvas_to_screen(x: i32, y: i32, canvas: egui::Rect) -> egui::Pos2 {
    egui::pos2(canvas.left() + x as f32, canvas.top() + y as f32)
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(0x11));
}

fn image_rect(app: &LabelerApp, canvas: egui::Rect, texture: &egui::TextureHandle) -> egui::Rect {
    let transform = &app.session.view().transform;
    let min = canvas_to_screen(
        transform.offset_x() as i32,
        transform.offset_y() as i32,
        canvas,
    );
    let [w, h] = texture.size();
    egui::Rect::from_min_size(min, egui::vec2(w as f32, h as f32))
}

fn draw_image(ui: &egui::Ui, texture: &egui::TextureHandle, img_rect: egui::Rect) {
    ui.painter().image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Image could not be decoded",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

/// Primary press starts a box, motion stretches it, release fixes it.
fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut LabelerApp,
    canvas: egui::Rect,
) {
    let (pressed, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    let Some(pos) = pos else {
        return;
    };
    let point = screen_to_canvas(pos, canvas);

    if pressed && response.hovered() {
        app.session.begin_drag(point);
    } else if app.session.is_dragging() {
        if released {
            app.session.end_drag(point);
        } else {
            app.session.drag_to(point);
        }
    }
}

fn draw_box(ui: &egui::Ui, current: &DisplayRect, canvas: egui::Rect) {
    let r = current.ordered();
    let screen = egui::Rect::from_min_max(
        canvas_to_screen(r.x1, r.y1, canvas),
        canvas_to_screen(r.x2, r.y2, canvas),
    );
    ui.painter().rect_stroke(
        screen,
        0.0,
        egui::Stroke::new(BOX_WIDTH, BOX_COLOR),
        egui::epaint::StrokeKind::Middle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_canvas_floors() {
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        let p = screen_to_canvas(egui::pos2(15.7, 20.2), canvas);
        assert_eq!(p, DisplayPoint::new(5, 0));

        let p = screen_to_canvas(egui::pos2(9.5, 19.5), canvas);
        assert_eq!(p, DisplayPoint::new(-1, -1));
    }

    #[test]
    fn test_canvas_to_screen_offsets() {
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        assert_eq!(canvas_to_screen(3, 4, canvas), egui::pos2(13.0, 24.0));
    }
}
