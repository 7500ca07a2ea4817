//! Bar chart of species lifespans, rendered to **PNG** or **SVG**.

use anyhow::{Context, Result, anyhow, bail};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontFamily, FontTransform};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Once;

pub const CHART_TITLE: &str = "Average Lifespan by Species in Star Wars";

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // skyblue
const LABEL_PX: u32 = 12;

/// `ab_glyph` does not discover OS fonts, so "sans-serif" is registered once
/// from the bundled DejaVu Sans.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Heuristic pixel width of `text` (Plotters has no text measuring before drawing).
fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Draw one vertical bar per `(label, value)` pair, in order.
///
/// The backend is picked from the extension: `.svg` gives SVG, anything else a bitmap.
pub fn plot_lifespans<P: AsRef<Path>>(
    labels: &[String],
    values: &[u64],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if labels.is_empty() {
        bail!("no data to plot");
    }
    if labels.len() != values.len() {
        bail!(
            "label/value length mismatch ({} vs {})",
            labels.len(),
            values.len()
        );
    }
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, labels, values)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, labels, values)
    }
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, labels: &[String], values: &[u64]) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = labels.len();
    let max_val = values.iter().copied().max().unwrap_or(0);
    // 10% headroom above the tallest bar
    let y_max = ((max_val as f64) * 1.1).ceil().max(1.0) as u64;

    // Rotated labels hang below the axis; size the band for the longest one.
    let (_, height) = root.dim_in_pixel();
    let longest = labels
        .iter()
        .map(|l| estimate_text_width_px(l, LABEL_PX))
        .max()
        .unwrap_or(0);
    let bottom_px = (longest + 40).clamp(60, (height / 2).max(60));

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(CHART_TITLE, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_px)
        .build_cartesian_2d((0..n).into_segmented(), 0u64..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Species")
        .y_desc("Average Lifespan (years)")
        .x_labels(n + 1)
        .x_label_formatter(&x_label_fmt)
        .x_label_style(
            ("sans-serif", f64::from(LABEL_PX))
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_labels(10)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, v)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *v)],
                BAR_COLOR.filled(),
            );
            bar.set_margin(0, 0, 2, 2);
            bar
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Open `path` in the platform's default image viewer without blocking.
///
/// The launcher is reaped on a background thread.
pub fn show(path: &Path) -> Result<()> {
    if cfg!(target_os = "macos") {
        launch_viewer("open", &[], path)
    } else if cfg!(windows) {
        launch_viewer("cmd", &["/C", "start", ""], path)
    } else {
        launch_viewer("xdg-open", &[], path)
    }
}

fn launch_viewer(program: &str, args: &[&str], path: &Path) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launch image viewer {program} for {}", path.display()))?;
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::debug!("image viewer wait failed: {e}");
        }
    });
    Ok(())
}
