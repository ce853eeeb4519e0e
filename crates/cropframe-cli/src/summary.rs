use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::Style;
use cropframe_core::config::FrameLayout;
use cropframe_core::model::{Axis, GeometryModel, ZoomRange};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    good: Style,
    bad: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green(),
            bad: Style::new().red(),
            path: Style::new().underlined(),
        }
    }
}

/// Everything `info` reports about one fitted image.
pub struct FitReport<'a> {
    pub path: &'a Path,
    pub natural: (u32, u32),
    pub frame: &'a FrameLayout,
    pub model: GeometryModel,
    pub zoom_range: ZoomRange,
    pub binding: Axis,
}

pub fn print_fit_summary(report: &FitReport<'_>) {
    let s = Styles::new();
    let m = &report.model;

    println!();
    println!("  {}", s.title.apply_to("Crop Frame Fit"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(report.path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frame"),
        s.value
            .apply_to(format!("{}x{}", report.frame.width, report.frame.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Size"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Natural"),
        s.value
            .apply_to(format!("{}x{}", report.natural.0, report.natural.1))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Normalized"),
        s.value.apply_to(format!(
            "{:.1}x{:.1}",
            m.original_width, m.original_height
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Displayed"),
        s.value.apply_to(format!("{:.1}x{:.1}", m.width, m.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Binding"),
        s.good.apply_to(report.binding)
    );
    println!();

    println!("  {}", s.header.apply_to("Zoom"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Initial"),
        s.value.apply_to(format!("{:.4}", m.zoom))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{:.4} .. {:.4} (step {})",
            report.zoom_range.min, report.zoom_range.max, report.zoom_range.step
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Placement"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Position"),
        s.value.apply_to(format!("({:.1}, {:.1})", m.x, m.y))
    );
    let [r, g, b] = m.background_color;
    println!(
        "    {:<12}{}",
        s.label.apply_to("Background"),
        s.value
            .apply_to(format!("#{r:02x}{g:02x}{b:02x}  rgb({r}, {g}, {b})"))
    );
    println!();
}

/// Outcome tally printed at the end of `batch`.
pub fn print_batch_summary(written: usize, failures: &BTreeMap<String, Vec<PathBuf>>) {
    let s = Styles::new();
    let failed: usize = failures.values().map(Vec::len).sum();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Written"),
        s.good.apply_to(written)
    );
    if failed == 0 {
        return;
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Failed"),
        s.bad.apply_to(failed)
    );
    for (kind, paths) in failures {
        println!("    {}", s.header.apply_to(kind));
        for path in paths {
            println!("      {}", s.path.apply_to(path.display()));
        }
    }
    println!();
}
