use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropframe_core::engine::fit;

use crate::settings::EditorArgs;
use crate::summary::{print_fit_summary, FitReport};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub editor: EditorArgs,
}

/// Load an image and report how it fits the crop frame.
pub fn run(args: &InfoArgs) -> Result<()> {
    let mut editor = args.editor.editor()?;
    editor
        .load_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let natural = editor
        .image_dimensions()
        .context("Image was not retained after loading")?;
    let binding = fit(
        natural.0,
        natural.1,
        editor.frame(),
        &editor.config().image,
        &editor.config().zoom,
    )
    .binding;

    print_fit_summary(&FitReport {
        path: &args.file,
        natural,
        frame: editor.frame(),
        model: editor.model(),
        zoom_range: editor.zoom_range(),
        binding,
    });
    Ok(())
}
