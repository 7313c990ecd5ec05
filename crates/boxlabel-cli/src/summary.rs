use std::path::PathBuf;

use boxlabel_core::classes::{ClassId, ClassList};
use boxlabel_core::config::Workspace;
use boxlabel_core::label::LabelState;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    labeled: Style,
    pending: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            labeled: Style::new().green(),
            pending: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

/// Label state of one image, resolved against the class list.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageStatus {
    Labeled { class_id: ClassId, name: Option<String> },
    Unlabeled,
    Malformed,
}

impl ImageStatus {
    pub fn from_state(state: &LabelState, classes: &ClassList) -> Self {
        match state {
            LabelState::Valid(record) => Self::Labeled {
                class_id: record.class_id,
                name: classes.name(record.class_id).map(str::to_string),
            },
            LabelState::Missing => Self::Unlabeled,
            LabelState::Malformed => Self::Malformed,
        }
    }

    fn is_done(&self) -> bool {
        matches!(self, Self::Labeled { .. })
    }
}

#[derive(Default)]
pub struct StatusReport {
    pub entries: Vec<(PathBuf, ImageStatus)>,
}

impl StatusReport {
    pub fn push(&mut self, image: PathBuf, status: ImageStatus) {
        self.entries.push((image, status));
    }

    /// (labeled, unlabeled, malformed)
    pub fn totals(&self) -> (usize, usize, usize) {
        let mut totals = (0, 0, 0);
        for (_, status) in &self.entries {
            match status {
                ImageStatus::Labeled { .. } => totals.0 += 1,
                ImageStatus::Unlabeled => totals.1 += 1,
                ImageStatus::Malformed => totals.2 += 1,
            }
        }
        totals
    }

    /// Images per class id, in class order. Unknown ids are left out.
    pub fn class_counts(&self, classes: &ClassList) -> Vec<(ClassId, usize)> {
        let mut counts = vec![0usize; classes.len()];
        for (_, status) in &self.entries {
            if let ImageStatus::Labeled { class_id, .. } = status {
                if let Some(count) = counts.get_mut(class_id.index()) {
                    *count += 1;
                }
            }
        }
        counts
            .into_iter()
            .enumerate()
            .map(|(i, n)| (ClassId::new(i), n))
            .collect()
    }
}

pub fn print_status_report(workspace: &Workspace, report: &StatusReport, pending_only: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Label Status"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!(
        "  {:<10}{}",
        s.label.apply_to("Images"),
        s.path.apply_to(workspace.config.images_dir.display())
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Labels"),
        s.path.apply_to(workspace.config.labels_dir.display())
    );
    println!();

    for (image, status) in &report.entries {
        if pending_only && status.is_done() {
            continue;
        }
        let name = image
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let state = match status {
            ImageStatus::Labeled {
                class_id,
                name: Some(class),
            } => s.labeled.apply_to(format!("{class_id} {class}")),
            ImageStatus::Labeled {
                class_id,
                name: None,
            } => s.error.apply_to(format!("{class_id} <unknown class>")),
            ImageStatus::Unlabeled => s.pending.apply_to("unlabeled".to_string()),
            ImageStatus::Malformed => s.error.apply_to("malformed".to_string()),
        };
        println!("  {:<32}{}", name, state);
    }

    let (labeled, unlabeled, malformed) = report.totals();
    println!();
    for (id, count) in report.class_counts(&workspace.classes) {
        let class = workspace.classes.name(id).unwrap_or_default();
        println!(
            "  {:<24}{}",
            s.label.apply_to(format!("{id} {class}")),
            s.value.apply_to(count)
        );
    }
    println!();
    println!(
        "  {} labeled, {} unlabeled, {} malformed of {}",
        s.labeled.apply_to(labeled),
        s.pending.apply_to(unlabeled),
        s.error.apply_to(malformed),
        s.value.apply_to(report.entries.len())
    );
    println!();
}
