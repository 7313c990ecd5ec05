mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::{Context, Result};
use boxlabel_core::config::AppConfig;
use boxlabel_core::session::AnnotationSession;
use clap::Parser;

/// Width reserved for the controls panel next to the canvas.
const SIDE_PANEL_WIDTH: f32 = 360.0;
/// Height reserved for the menu and status bars.
const CHROME_HEIGHT: f32 = 80.0;

#[derive(Parser)]
#[command(name = "boxlabel-gui", about = "Draw one bounding box per image")]
#[command(version)]
struct Args {
    /// TOML config file (defaults to ./boxlabel.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of images to label
    #[arg(long)]
    images: Option<PathBuf>,

    /// Directory label files are written to
    #[arg(long)]
    labels: Option<PathBuf>,

    /// YAML file with a `names:` list
    #[arg(long)]
    classes: Option<PathBuf>,

    /// Maximum canvas width in pixels
    #[arg(long)]
    max_width: Option<u32>,

    /// Maximum canvas height in pixels
    #[arg(long)]
    max_height: Option<u32>,
}

impl Args {
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(ref dir) = self.images {
            config.images_dir = dir.clone();
        }
        if let Some(ref dir) = self.labels {
            config.labels_dir = dir.clone();
        }
        if let Some(ref path) = self.classes {
            config.classes_path = path.clone();
        }
        if let Some(w) = self.max_width {
            config.max_display_width = w;
        }
        if let Some(h) = self.max_height {
            config.max_display_height = h;
        }
        Ok(config)
    }
}

fn start_session(args: &Args) -> Result<AnnotationSession> {
    let workspace = args.resolve_config()?.validate()?;
    let session = AnnotationSession::open(workspace).context("Failed to open first image")?;
    Ok(session)
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let session = match start_session(&args) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("{err:#}");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Cannot start")
                .set_description(format!("{err:#}"))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            std::process::exit(1);
        }
    };

    let (canvas_w, canvas_h) = session.canvas_size();
    let inner_size = [
        canvas_w as f32 + SIDE_PANEL_WIDTH,
        canvas_h as f32 + CHROME_HEIGHT,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title("Box Labeler"),
        ..Default::default()
    };

    eframe::run_native(
        "BoxLabeler",
        options,
        Box::new(|_cc| Ok(Box::new(app::LabelerApp::new(session)))),
    )
}
