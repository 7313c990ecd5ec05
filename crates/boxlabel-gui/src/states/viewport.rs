use std::path::PathBuf;

/// Canvas display state.
#[derive(Default)]
pub struct ViewportState {
    /// Current image, already scaled to display size.
    pub texture: Option<egui::TextureHandle>,
    /// Image the texture was decoded from.
    pub loaded_path: Option<PathBuf>,
}
