use anyhow::Result;
use boxlabel_core::label::inspect_label;
use clap::Args;

use super::WorkspaceArgs;
use crate::summary::{print_status_report, ImageStatus, StatusReport};

#[derive(Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Only list images without a valid label
    #[arg(long)]
    pub pending: bool,
}

pub fn run(args: &StatusArgs) -> Result<()> {
    let workspace = args.workspace.inspect()?;

    let mut report = StatusReport::default();
    for image in &workspace.images {
        let state = inspect_label(&workspace.label_path_for(image));
        let status = ImageStatus::from_state(&state, &workspace.classes);
        tracing::debug!("{}: {status:?}", image.display());
        report.push(image.clone(), status);
    }

    print_status_report(&workspace, &report, args.pending);
    Ok(())
}
