//! Annotation session: the one image on screen, its box and its class.
//!
//! All state is replaced, never shared. Navigating swaps in a fresh
//! [`ImageView`] and resets the box and class; dragging swaps in a new
//! [`DisplayRect`] on every pointer event.

use std::path::{Path, PathBuf};

use crate::classes::{ClassId, ClassList};
use crate::codec::{
    denormalize, normalize, to_display, to_original, DisplayPoint, DisplayRect, DisplayTransform,
    LabelRecord,
};
use crate::config::Workspace;
use crate::error::{LabelerError, Result};
use crate::images::image_dimensions;
use crate::label::{load_record, save_record};

/// The image currently on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub transform: DisplayTransform,
}

impl ImageView {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Result of a successful save.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOutcome {
    pub label_path: PathBuf,
    pub record: LabelRecord,
    /// Whether the session moved on to the next image.
    pub advanced: bool,
    /// Why the next image could not be opened, when it could not.
    pub advance_error: Option<String>,
}

pub struct AnnotationSession {
    workspace: Workspace,
    index: usize,
    view: ImageView,
    current_box: Option<DisplayRect>,
    drag_anchor: Option<DisplayPoint>,
    selected: Option<ClassId>,
    status: String,
}

impl AnnotationSession {
    /// Start on the first image.
    pub fn open(workspace: Workspace) -> Result<Self> {
        let first = workspace
            .images
            .first()
            .cloned()
            .ok_or_else(|| LabelerError::NoImages(workspace.config.images_dir.clone()))?;
        let view = build_view(&workspace, &first)?;

        let mut session = Self {
            workspace,
            index: 0,
            view,
            current_box: None,
            drag_anchor: None,
            selected: None,
            status: String::new(),
        };
        session.apply_existing_label();
        Ok(session)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn classes(&self) -> &ClassList {
        &self.workspace.classes
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image_count(&self) -> usize {
        self.workspace.images.len()
    }

    pub fn view(&self) -> &ImageView {
        &self.view
    }

    pub fn current_box(&self) -> Option<DisplayRect> {
        self.current_box
    }

    pub fn selected_class(&self) -> Option<ClassId> {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.workspace.config.max_display_width,
            self.workspace.config.max_display_height,
        )
    }

    pub fn label_path(&self) -> PathBuf {
        self.workspace.label_path_for(&self.view.path)
    }

    /// Show image `index` (clamped to the list), replacing box and class.
    ///
    /// On error the session is left on the previous image.
    pub fn load(&mut self, index: usize) -> Result<()> {
        let index = index.min(self.image_count().saturating_sub(1));
        let path = self.workspace.images[index].clone();
        let view = build_view(&self.workspace, &path)?;

        self.index = index;
        self.view = view;
        self.current_box = None;
        self.drag_anchor = None;
        self.selected = None;
        self.status.clear();
        self.apply_existing_label();

        tracing::debug!(
            "Showing {} ({}/{})",
            self.view.path.display(),
            self.index + 1,
            self.image_count()
        );
        Ok(())
    }

    /// Move back one image. Returns false at the first image.
    pub fn prev(&mut self) -> Result<bool> {
        if self.index == 0 {
            return Ok(false);
        }
        self.load(self.index - 1)?;
        Ok(true)
    }

    /// Move forward one image. Returns false at the last image.
    pub fn next(&mut self) -> Result<bool> {
        if self.index + 1 >= self.image_count() {
            return Ok(false);
        }
        self.load(self.index + 1)?;
        Ok(true)
    }

    pub fn begin_drag(&mut self, point: DisplayPoint) {
        let anchor = self.clamp_to_canvas(point);
        self.drag_anchor = Some(anchor);
        self.current_box = Some(DisplayRect::from_corners(anchor, anchor));
    }

    pub fn drag_to(&mut self, point: DisplayPoint) {
        if let Some(anchor) = self.drag_anchor {
            let end = self.clamp_to_canvas(point);
            self.current_box = Some(DisplayRect::from_corners(anchor, end));
        }
    }

    pub fn end_drag(&mut self, point: DisplayPoint) {
        self.drag_to(point);
        self.drag_anchor = None;
    }

    pub fn clear_box(&mut self) {
        self.current_box = None;
        self.drag_anchor = None;
        self.status = "Cleared bounding box.".to_string();
    }

    /// Select a class, or none. Unknown ids clear the selection.
    pub fn select_class(&mut self, class: Option<ClassId>) {
        self.selected = class.filter(|id| self.workspace.classes.contains(*id));
    }

    /// Select `id`, or deselect it if it is already selected.
    pub fn toggle_class(&mut self, id: ClassId) {
        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.select_class(Some(id));
        }
    }

    /// Write the current class and box, then advance unless on the last image.
    ///
    /// Once the label is written this succeeds; a next image that fails to
    /// open leaves the session where it was and is reported in the outcome.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let class_id = self.selected.ok_or(LabelerError::MissingClass)?;
        let rect = self.current_box.ok_or(LabelerError::MissingBox)?;

        let record = self.record_for(class_id, &rect);
        let label_path = self.label_path();
        save_record(&label_path, &record)?;

        self.status = format!("Saved: {}", file_name(&label_path));
        let (advanced, advance_error) = match self.next() {
            Ok(advanced) => (advanced, None),
            Err(err) => {
                tracing::warn!(
                    "Saved {} but could not open the next image: {err}",
                    label_path.display()
                );
                self.status = format!(
                    "Saved: {}. Next image failed: {err}",
                    file_name(&label_path)
                );
                (false, Some(err.to_string()))
            }
        };

        Ok(SaveOutcome {
            label_path,
            record,
            advanced,
            advance_error,
        })
    }

    /// The record `save` would write for `rect` on the current image.
    pub fn record_for(&self, class_id: ClassId, rect: &DisplayRect) -> LabelRecord {
        let pixel = to_original(&rect.ordered(), &self.view.transform);
        normalize(class_id, &pixel, self.view.width, self.view.height)
    }

    fn clamp_to_canvas(&self, point: DisplayPoint) -> DisplayPoint {
        let (w, h) = self.canvas_size();
        point.clamped(w, h)
    }

    fn apply_existing_label(&mut self) {
        let Some(record) = load_record(&self.label_path()) else {
            return;
        };

        let pixel = denormalize(&record, self.view.width, self.view.height);
        let (w, h) = self.canvas_size();
        self.current_box = Some(to_display(&pixel, &self.view.transform).clamped(w, h));

        if self.workspace.classes.contains(record.class_id) {
            self.selected = Some(record.class_id);
        } else {
            tracing::warn!(
                "Label {} has class {} outside the class list",
                self.label_path().display(),
                record.class_id
            );
        }
        self.status = format!("Loaded existing label: class={}", record.class_id);
    }
}

fn build_view(workspace: &Workspace, path: &Path) -> Result<ImageView> {
    let (width, height) = image_dimensions(path)?;
    let transform = DisplayTransform::fit(
        width,
        height,
        workspace.config.max_display_width,
        workspace.config.max_display_height,
    )?;
    Ok(ImageView {
        path: path.to_path_buf(),
        width,
        height,
        transform,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
