//! Four-axis radar chart drawn as inline SVG.
//!
//! DESIGN
//! ======
//! Axes run clockwise from the top, one per dimension, on a fixed 0-10
//! scale. Geometry is computed in plain functions so it can be tested
//! without a DOM.

#[cfg(test)]
#[path = "radar_chart_test.rs"]
mod radar_chart_test;

use std::f64::consts::FRAC_PI_2;

use leptos::prelude::*;

pub const RADAR_MAX: f64 = 10.0;
const SIZE: f64 = 240.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 90.0;
/// Grid rings at 25/50/75/100 % of the scale.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Vertex for `value` on axis `index` of `axes`, starting at 12 o'clock.
pub fn radar_point(index: usize, axes: usize, value: f64, center: f64, radius: f64) -> (f64, f64) {
    let fraction = (value / RADAR_MAX).clamp(0.0, 1.0);
    #[allow(clippy::cast_precision_loss)]
    let angle = -FRAC_PI_2 + (index as f64) * std::f64::consts::TAU / (axes.max(1) as f64);
    (center + radius * fraction * angle.cos(), center + radius * fraction * angle.sin())
}

/// Polygon vertices for `values`, one per axis.
pub fn radar_points(values: &[f64], center: f64, radius: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| radar_point(i, values.len(), *v, center, radius))
        .collect()
}

/// SVG `points` attribute for a polygon.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn RadarChart(
    /// Axis labels, clockwise from the top.
    labels: Vec<&'static str>,
    /// Scores on a 0-10 scale, same order as `labels`.
    values: Vec<f64>,
) -> impl IntoView {
    let axes = labels.len();
    let data = points_attr(&radar_points(&values, CENTER, RADIUS));
    let rings = RINGS
        .iter()
        .map(|ring| {
            let outline = points_attr(&radar_points(&vec![RADAR_MAX * ring; axes], CENTER, RADIUS));
            view! { <polygon class="radar__ring" points=outline></polygon> }
        })
        .collect_view();
    let spokes = (0..axes)
        .map(|i| {
            let (x, y) = radar_point(i, axes, RADAR_MAX, CENTER, RADIUS);
            view! { <line class="radar__spoke" x1=CENTER y1=CENTER x2=x y2=y></line> }
        })
        .collect_view();
    let captions = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (x, y) = radar_point(i, axes, RADAR_MAX, CENTER, RADIUS * 1.22);
            view! {
                <text class="radar__label" x=x y=y text-anchor="middle" dominant-baseline="middle">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="radar" viewBox=format!("0 0 {SIZE} {SIZE}") role="img" aria-label="Score radar chart">
            {rings}
            {spokes}
            <polygon class="radar__area" points=data></polygon>
            {captions}
        </svg>
    }
}
