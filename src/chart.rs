//! Chart rendering.
//!
//! Draws the convergence-time figure with plotters: a mean line with markers,
//! a shaded min–max band, and ±1 standard deviation error bars per peer
//! count.

use crate::error::PlotError;
use crate::model::GroupStats;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// Raster size for a 7 x 4.5 inch figure at 160 dpi.
const CHART_SIZE: (u32, u32) = (1120, 720);

/// Probe the chart backend before any file I/O.
///
/// The chart stack is statically linked, but text rendering resolves fonts
/// through the system font database at runtime and that lookup can fail on a
/// bare host. Draw a label into a throwaway in-memory bitmap so the failure
/// surfaces up front, before the input file is touched.
pub fn probe_backend() -> Result<(), PlotError> {
    let (width, height) = (64u32, 64u32);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();

    root.draw(&Text::new("probe", (4, 4), ("sans-serif", 12).into_font()))
        .map_err(|e| PlotError::DependencyUnavailable {
            reason: e.to_string(),
        })?;
    Ok(())
}

/// Render the chart to `path`, overwriting any existing file.
///
/// `rows` must be non-empty and sorted by ascending `n`; the caller checks
/// the no-data case so it can report which input file was empty.
pub fn render(path: &Path, rows: &[GroupStats]) -> Result<(), PlotError> {
    draw(path, rows).map_err(|e| PlotError::Render(e.to_string()))?;
    debug!(path = %path.display(), groups = rows.len(), "chart written");
    Ok(())
}

fn draw(path: &Path, rows: &[GroupStats]) -> Result<(), Box<dyn std::error::Error>> {
    let x_min = rows.first().map(|r| r.n).unwrap_or(0) as f64;
    let x_max = rows.last().map(|r| r.n).unwrap_or(0) as f64;
    let x_pad = ((x_max - x_min) * 0.05).max(0.5);

    let y_max = rows
        .iter()
        .map(|r| r.max.max(r.mean + r.stddev))
        .fold(0.0f64, f64::max);
    let y_pad = (y_max * 0.05).max(0.1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Convergence time towards 1/N vs N", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), 0.0..(y_max + y_pad))?;

    chart
        .configure_mesh()
        .x_desc("Number of peers (N)")
        .y_desc("Time to converge (s)")
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    // Min-max band, drawn first so the mean line stays on top. Degenerate
    // with a single group, same as the original figure.
    if rows.len() >= 2 {
        let mut band: Vec<(f64, f64)> = rows.iter().map(|r| (r.n as f64, r.max)).collect();
        band.extend(rows.iter().rev().map(|r| (r.n as f64, r.min)));
        chart
            .draw_series(std::iter::once(Polygon::new(band, BLACK.mix(0.2).filled())))?
            .label("Min-Max range")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 4), (x + 16, y + 4)], BLACK.mix(0.2).filled())
            });
    }

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.n as f64, r.mean)),
            BLUE.stroke_width(2),
        ))?
        .label("Average convergence time")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));
    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.n as f64, r.mean), 4, BLUE.filled())),
    )?;

    chart
        .draw_series(rows.iter().map(|r| {
            ErrorBar::new_vertical(
                r.n as f64,
                r.mean - r.stddev,
                r.mean,
                r.mean + r.stddev,
                RED.mix(0.6).filled(),
                6,
            )
        }))?
        .label("Std dev")
        .legend(|(x, y)| PathElement::new(vec![(x, y - 5), (x, y + 5)], RED.mix(0.6)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
