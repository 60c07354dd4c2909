use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use plotters::prelude::*;
use tracing::info;

use crate::utils::slug;

pub const FIRST_YEAR: f64 = 1950.0;
pub const LAST_YEAR: f64 = 2020.0;
pub const SAMPLED_YEARS: usize = 15;

const CHART_SIZE: (u32, u32) = (960, 640);
const TITLE_FONT: (&str, u32) = ("Courier New", 22);
const REBECCA_PURPLE: RGBColor = RGBColor(102, 51, 153);

/// The time axis: 15 evenly spaced sample points from 1950 to 2020
/// inclusive, independent of how many ratios a record carried.
pub fn sampled_years() -> Vec<f64> {
    let step = (LAST_YEAR - FIRST_YEAR) / (SAMPLED_YEARS - 1) as f64;
    (0..SAMPLED_YEARS)
        .map(|i| FIRST_YEAR + step * i as f64)
        .collect()
}

/// Draw the series as a line+marker SVG chart under `out_dir` and return
/// the artifact path. A 14-sample series is paired with the first 14 years.
pub fn render(series: &[f64], label: &str, out_dir: &Path) -> Result<PathBuf> {
    ensure!(!series.is_empty(), "nothing to plot for {label}");

    let out_path = out_dir.join(format!("sex-ratio-{}.svg", slug(label)));
    let title = format!("Sex ratio in 1950 - 2020 in {label}");

    let y_min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(0.5);

    let points: Vec<(f64, f64)> = sampled_years()
        .into_iter()
        .zip(series.iter().copied())
        .collect();

    let root = SVGBackend::new(&out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, TITLE_FONT.into_font().color(&REBECCA_PURPLE))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (FIRST_YEAR - 5.0)..(LAST_YEAR + 5.0),
            (y_min - pad)..(y_max + pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Years")
        .y_desc("Males per 100 females")
        .axis_desc_style(("Courier New", 16))
        .draw()?;

    chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 4, BLUE.filled())),
    )?;

    root.present()
        .with_context(|| format!("could not write chart to {}", out_path.display()))?;

    info!(label, chart = %out_path.display(), "rendered chart");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn year_axis_spans_1950_to_2020() {
        let years = sampled_years();
        assert_eq!(years.len(), 15);
        assert_eq!(years[0], 1950.0);
        assert_eq!(years[14], 2020.0);
        for pair in years.windows(2) {
            assert_eq!(pair[1] - pair[0], 5.0);
        }
    }

    #[test]
    fn render_writes_titled_svg() -> Result<()> {
        let dir = tempdir()?;
        let series = vec![
            99.7, 99.9, 100.1, 100.3, 100.6, 100.6, 100.8, 101.0, 101.1, 101.4, 101.4, 101.6,
            101.7, 101.7, 101.8,
        ];
        let path = render(&series, "WORLD", dir.path())?;
        let svg = fs::read_to_string(&path)?;
        assert!(svg.contains("Sex ratio in 1950 - 2020 in WORLD"));
        assert!(svg.contains("Males per 100 females"));
        Ok(())
    }

    #[test]
    fn short_series_renders_fourteen_points() -> Result<()> {
        let dir = tempdir()?;
        let series = vec![
            99.7, 99.9, 100.1, 100.3, 100.6, 100.6, 100.8, 101.0, 101.1, 101.4, 101.4, 101.6,
            101.7, 101.7,
        ];
        let path = render(&series, "Aggregate Row", dir.path())?;
        assert!(path.ends_with("sex-ratio-aggregate-row.svg"));
        assert!(path.exists());
        Ok(())
    }
}
