use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use boxlabel_core::classes::ClassList;
use boxlabel_core::codec::denormalize;
use boxlabel_core::images::image_dimensions;
use boxlabel_core::label::{inspect_label, label_path_for, LabelState};
use clap::Args;

use super::WorkspaceArgs;

#[derive(Args)]
pub struct ShowArgs {
    /// Image to show the label for
    pub image: PathBuf,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

pub fn run(args: &ShowArgs) -> Result<()> {
    let config = args.workspace.resolve_config()?;
    let classes = ClassList::load(&config.classes_path)?;
    let (width, height) = image_dimensions(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;
    let label_path = label_path_for(&config.labels_dir, &args.image);

    println!("Image:       {}", args.image.display());
    println!("Dimensions:  {width}x{height}");
    println!("Label file:  {}", label_path.display());

    let record = match inspect_label(&label_path) {
        LabelState::Valid(record) => record,
        LabelState::Missing => {
            println!("Label:       none");
            return Ok(());
        }
        LabelState::Malformed => bail!("Malformed label file {}", label_path.display()),
    };

    let class = classes.name(record.class_id).unwrap_or("<unknown>");
    let rect = denormalize(&record, width, height);

    println!("Label:       {record}");
    println!("Class:       {} ({class})", record.class_id);
    println!(
        "Pixels:      ({:.1}, {:.1}) - ({:.1}, {:.1})",
        rect.x1, rect.y1, rect.x2, rect.y2
    );
    println!("Box size:    {:.1}x{:.1}", rect.width(), rect.height());

    Ok(())
}
