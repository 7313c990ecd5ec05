use boxlabel_core::images::RgbaImage;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            egui::Color32::from_rgba_unmultiplied(r, g, b, a)
        })
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
