//! Before/after waveform comparison plot.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Result, ScrubError};

/// Render two stacked time-domain line plots of the original and
/// filtered signals to a PNG at `out_path`.
pub fn plot_comparison(original: &[f64], filtered: &[f64], out_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ScrubError::Plot(e.to_string()))?;

    let panels = root.split_evenly((2, 1));
    draw_panel(&panels[0], original, "Noisy Audio Signal")?;
    draw_panel(&panels[1], filtered, "Filtered Audio Signal")?;

    root.present().map_err(|e| ScrubError::Plot(e.to_string()))?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    samples: &[f64],
    title: &str,
) -> Result<()> {
    let (min, max) = amplitude_range(samples);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..samples.len().max(1) as f64, min..max)
        .map_err(|e| ScrubError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Time (samples)")
        .y_desc("Amplitude")
        .draw()
        .map_err(|e| ScrubError::Plot(e.to_string()))?;

    let series = samples.iter().enumerate().map(|(i, &y)| (i as f64, y));
    chart
        .draw_series(LineSeries::new(series, &BLUE))
        .map_err(|e| ScrubError::Plot(e.to_string()))?;

    Ok(())
}

/// Vertical range for a panel, padded so a flat signal still plots.
fn amplitude_range(samples: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &s in samples {
        min = min.min(s);
        max = max.max(s);
    }
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}
