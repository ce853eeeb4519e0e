use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use cropframe_core::config::{EditorConfig, FrameLayout};
use cropframe_core::editor::{CropEditor, Hooks};
use serde::{Deserialize, Serialize};

/// Contents of a `--config` file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub frame: FrameLayout,
    #[serde(default)]
    pub editor: EditorConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

/// Options shared by every command that builds an editor.
#[derive(Args, Clone, Debug)]
pub struct EditorArgs {
    /// Crop frame size, e.g. 400x300 (overrides the config file)
    #[arg(long, value_parser = parse_frame)]
    pub frame: Option<(u32, u32)>,

    /// Editor config file (TOML, see `cropframe config`)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EditorArgs {
    pub fn resolve(&self) -> Result<CliConfig> {
        let mut config = match self.config {
            Some(ref path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if let Some((width, height)) = self.frame {
            let padding = config.frame.left.min(config.frame.top);
            config.frame = FrameLayout::centered(width, height, padding);
        }
        Ok(config)
    }

    /// Build an editor with no hooks attached.
    pub fn editor(&self) -> Result<CropEditor> {
        let config = self.resolve()?;
        CropEditor::new(config.frame, config.editor, Hooks::new()).context("Invalid editor setup")
    }
}

/// Parse `WxH` (`x` or `X`).
pub fn parse_frame(s: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = s.trim().split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got '{s}'");
    };
    let width: u32 = w.trim().parse().with_context(|| format!("bad width '{w}'"))?;
    let height: u32 = h.trim().parse().with_context(|| format!("bad height '{h}'"))?;
    if width == 0 || height == 0 {
        bail!("frame must be non-empty, got {width}x{height}");
    }
    Ok((width, height))
}

/// Parse `DX,DY`.
pub fn parse_pan(s: &str) -> Result<(f64, f64)> {
    let Some((dx, dy)) = s.split_once(',') else {
        bail!("expected DX,DY, got '{s}'");
    };
    let dx: f64 = dx.trim().parse().with_context(|| format!("bad dx '{dx}'"))?;
    let dy: f64 = dy.trim().parse().with_context(|| format!("bad dy '{dy}'"))?;
    Ok((dx, dy))
}
