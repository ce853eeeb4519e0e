use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use cropframe_core::io::image_io::save_surface;
use cropframe_core::render::ExportFormat;
use tracing::debug;

use crate::settings::{parse_pan, EditorArgs};

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Png,
    Jpeg,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Jpeg => ExportFormat::Jpeg,
        }
    }
}

#[derive(Args)]
pub struct CropArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub editor: EditorArgs,

    /// Zoom slider value (snapped to the step and clamped to the fitted range)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Drag offset from the frame center, e.g. -40,10
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
    pub pan: Option<(f64, f64)>,

    /// Output encoding (default: from the output extension, else PNG)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Encoder quality in (0, 1]; JPEG only
    #[arg(long, default_value = "1.0")]
    pub quality: f32,

    /// Also save the helper overlay surface
    #[arg(long)]
    pub helper: Option<PathBuf>,

    /// Print a data URL instead of writing a file
    #[arg(long)]
    pub data_url: bool,

    /// Output file path (default: <input>_crop.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load, zoom, drag and export one crop.
pub fn run(args: &CropArgs) -> Result<()> {
    let mut editor = args.editor.editor()?;
    editor
        .load_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if let Some(zoom) = args.zoom {
        editor.set_zoom(zoom);
    }

    if let Some((dx, dy)) = args.pan {
        let cx = editor.frame().width as f64 / 2.0;
        let cy = editor.frame().height as f64 / 2.0;
        editor.pointer_down(cx, cy);
        let moved = editor.pointer_move(cx + dx, cy + dy);
        editor.pointer_up();
        if !moved {
            debug!(dx, dy, "Drag had no effect");
        }
    }

    let format = args
        .format
        .map(ExportFormat::from)
        .or_else(|| args.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or_default();

    if args.data_url {
        println!("{}", editor.export_data_url(format, Some(args.quality))?);
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output(&args.file, format));
        let bytes = editor.export_crop(format, Some(args.quality))?;
        std::fs::write(&output, bytes)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        let m = editor.model();
        println!(
            "Cropped at zoom {:.3}, position ({:.1}, {:.1}) -> {}",
            m.zoom,
            m.x,
            m.y,
            output.display()
        );
    }

    if let Some(ref helper_path) = args.helper {
        let surface = editor
            .helper_surface()
            .context("Helper surface is disabled in the editor config")?;
        save_surface(surface, helper_path, args.quality)
            .with_context(|| format!("Failed to write {}", helper_path.display()))?;
        println!("Helper saved to {}", helper_path.display());
    }

    Ok(())
}

/// `<dir>/<stem>_crop.<ext>` next to the input.
pub fn default_output(input: &Path, format: ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{stem}_crop.{}", format.extension()))
}
