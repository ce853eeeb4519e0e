use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cropframe_core::editor::{CropEditor, Hooks};
use cropframe_core::error::CropFrameError;
use cropframe_core::render::ExportFormat;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use super::crop::FormatArg;
use crate::settings::{CliConfig, EditorArgs};
use crate::summary::print_batch_summary;

#[derive(Args)]
pub struct BatchArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory for the cropped images
    #[arg(long)]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub editor: EditorArgs,

    /// Output encoding
    #[arg(long, value_enum, default_value = "png")]
    pub format: FormatArg,
}

/// Crop every image at its initial fit, in parallel.
pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.editor.resolve()?;
    config.editor.validate()?;
    config.frame.validate()?;
    let format = ExportFormat::from(args.format);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    println!(
        "Cropping {} images into {}x{} frames...",
        args.files.len(),
        config.frame.width,
        config.frame.height
    );

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Cropping");

    let results: Vec<(PathBuf, std::result::Result<PathBuf, CropFrameError>)> = args
        .files
        .par_iter()
        .map(|file| {
            let result = crop_one(file, &args.out_dir, &config, format);
            pb.inc(1);
            (file.clone(), result)
        })
        .collect();
    pb.finish_with_message("Done");

    let mut written = 0;
    let mut failures: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for (file, result) in results {
        match result {
            Ok(_) => written += 1,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "Crop failed");
                failures.entry(e.kind().to_string()).or_default().push(file);
            }
        }
    }

    print_batch_summary(written, &failures);
    Ok(())
}

fn crop_one(
    file: &Path,
    out_dir: &Path,
    config: &CliConfig,
    format: ExportFormat,
) -> std::result::Result<PathBuf, CropFrameError> {
    let mut editor = CropEditor::new(config.frame.clone(), config.editor.clone(), Hooks::new())?;
    editor.load_file(file)?;

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let output = out_dir.join(format!("{stem}.{}", format.extension()));
    std::fs::write(&output, editor.export_crop(format, None)?)?;
    Ok(output)
}
