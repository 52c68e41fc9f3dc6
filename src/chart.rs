//! Chart rendering as an optional capability.
//!
//! The real renderer is only compiled with the `charts` feature; without it
//! the factory substitutes a no-op so call sites stay unconditional and the
//! Markdown output is unaffected.

use std::path::Path;

/// Data and labels for one line chart: y values against scale labels on the
/// x-axis, in ascending numeric scale order.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(String, f64)>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Backend(String),
}

pub trait ChartRenderer {
    /// Whether this renderer actually produces image files.
    fn enabled(&self) -> bool;

    fn line_chart(&self, series: &ChartSeries, path: &Path) -> Result<(), ChartError>;
}

/// Substitute renderer used when chart support is compiled out.
pub struct NoopRenderer;

impl ChartRenderer for NoopRenderer {
    fn enabled(&self) -> bool {
        false
    }

    fn line_chart(&self, _series: &ChartSeries, _path: &Path) -> Result<(), ChartError> {
        Ok(())
    }
}

/// Create the renderer for this build.
#[cfg(feature = "charts")]
pub fn create_renderer() -> Box<dyn ChartRenderer> {
    Box::new(PlottersRenderer)
}

/// Create the renderer for this build.
#[cfg(not(feature = "charts"))]
pub fn create_renderer() -> Box<dyn ChartRenderer> {
    Box::new(NoopRenderer)
}

#[cfg(feature = "charts")]
pub use plotters_renderer::PlottersRenderer;

#[cfg(feature = "charts")]
mod plotters_renderer {
    use super::{ChartError, ChartRenderer, ChartSeries};
    use plotters::prelude::*;
    use std::path::Path;

    // Matches the original 8x4 inch figures at 150 dpi.
    const WIDTH: u32 = 1200;
    const HEIGHT: u32 = 600;

    /// PNG line charts via plotters' bitmap backend.
    pub struct PlottersRenderer;

    impl ChartRenderer for PlottersRenderer {
        fn enabled(&self) -> bool {
            true
        }

        fn line_chart(&self, series: &ChartSeries, path: &Path) -> Result<(), ChartError> {
            let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
            root.fill(&WHITE).map_err(backend)?;

            let y_max = series
                .points
                .iter()
                .map(|(_, value)| *value)
                .fold(0.0_f64, f64::max);
            let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
            let x_max = series.points.len().saturating_sub(1).max(1) as i32;

            let mut chart = ChartBuilder::on(&root)
                .caption(&series.title, ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d(0..x_max, 0.0..y_max)
                .map_err(backend)?;

            let points = &series.points;
            chart
                .configure_mesh()
                .x_desc(series.x_label.as_str())
                .y_desc(series.y_label.as_str())
                .x_labels(points.len().max(2))
                .x_label_formatter(&|index| {
                    points
                        .get(*index as usize)
                        .map(|(label, _)| label.clone())
                        .unwrap_or_default()
                })
                .draw()
                .map_err(backend)?;

            chart
                .draw_series(LineSeries::new(
                    points
                        .iter()
                        .enumerate()
                        .map(|(index, (_, value))| (index as i32, *value)),
                    &BLUE,
                ))
                .map_err(backend)?;
            chart
                .draw_series(points.iter().enumerate().map(|(index, (_, value))| {
                    Circle::new((index as i32, *value), 3, BLUE.filled())
                }))
                .map_err(backend)?;

            root.present().map_err(backend)?;
            Ok(())
        }
    }

    fn backend<E: std::fmt::Display>(e: E) -> ChartError {
        ChartError::Backend(e.to_string())
    }
}
