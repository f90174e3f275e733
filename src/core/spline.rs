//! Stückweise Bézier-Splines aus überlappenden Kontrollpunkt-Fenstern.
//!
//! Aufeinanderfolgende Segmente teilen genau einen Randpunkt (C0). Für C1
//! wird in jedes Folgesegment ein zusätzlicher Punkt eingefügt, der den
//! End-Schenkel des Vorgängers am gemeinsamen Endpunkt fortsetzt, skaliert
//! auf den Grad des Folgesegments.

use super::curve::Curve;
use super::error::CurveError;
use super::vector::{add, scale, Vector2};
use std::ops::RangeInclusive;

/// Anzahl Segmente für `n` Kontrollpunkte bei Grad `degree`: ⌈(n−1)/degree⌉.
///
/// 0 bei weniger als zwei Punkten oder Grad 0.
pub fn segment_count(n: usize, degree: usize) -> usize {
    if n < 2 || degree == 0 {
        return 0;
    }
    (n - 1).div_ceil(degree)
}

/// Index-Fenster der Segmente: `c·d ..= min(c·d + d, n − 1)`.
pub fn segment_ranges(n: usize, degree: usize) -> Vec<RangeInclusive<usize>> {
    (0..segment_count(n, degree))
        .map(|c| {
            let start = c * degree;
            start..=(start + degree).min(n - 1)
        })
        .collect()
}

fn check_degree(degree: usize) -> Result<(), CurveError> {
    if degree == 0 {
        return Err(CurveError::InvalidPiecewiseDegree { degree });
    }
    Ok(())
}

/// Zerlegt `points` in C0-stetige Segmente vom Grad `degree` (letztes ggf. kürzer).
pub fn c0_segments(points: &[Vector2], degree: usize) -> Result<Vec<Curve>, CurveError> {
    check_degree(degree)?;
    Ok(segment_ranges(points.len(), degree)
        .into_iter()
        .map(|range| Curve::from_points(points[range].to_vec()))
        .collect())
}

/// Zerlegt `points` in C1-stetige Segmente.
///
/// Segment 0 entspricht dem C0-Fenster. Jedes weitere Segment erhält hinter
/// dem gemeinsamen Startpunkt `P0` den synthetischen Punkt
/// `S = P0 + (d_prev / d_next) · (P_last(prev) − P_penultimate(prev))`,
/// wobei `prev` das bereits erweiterte Vorgängersegment ist und `d_next`
/// der Grad nach dem Einfügen. Damit gilt `B_prev'(1) = B_next'(0)`.
/// `S` ist nur Teil der Auswertung, nie ein Kontrollpunkt des Modells.
pub fn c1_segments(points: &[Vector2], degree: usize) -> Result<Vec<Curve>, CurveError> {
    let windows = c0_segments(points, degree)?;
    let mut segments: Vec<Curve> = Vec::with_capacity(windows.len());

    for window in windows {
        let Some(prev) = segments.last() else {
            segments.push(window);
            continue;
        };
        let prev_pts = prev.points();
        let end = prev_pts[prev_pts.len() - 1];
        let penultimate = prev_pts[prev_pts.len() - 2];

        let prev_degree = (prev_pts.len() - 1) as f64;
        // Nach dem Einfügen hat das Segment so viele Punkte wie das Fenster + 1
        let next_degree = window.len() as f64;

        let mut augmented = window.into_points();
        let leg = scale(end - penultimate, prev_degree / next_degree);
        let synthesized = add(augmented[0], leg);
        augmented.insert(1, synthesized);
        segments.push(Curve::from_points(augmented));
    }

    Ok(segments)
}

/// Ableitungen an einer Segmentgrenze: `B_prev'(1)` und `B_next'(0)`.
///
/// `B'(1) = d · (P_d − P_{d−1})`, `B'(0) = d · (P_1 − P_0)`. Bei C1 sind beide gleich.
pub fn junction_tangents(prev: &Curve, next: &Curve) -> Option<(Vector2, Vector2)> {
    let p = prev.points();
    let n = next.points();
    if p.len() < 2 || n.len() < 2 {
        return None;
    }
    let end = scale(p[p.len() - 1] - p[p.len() - 2], (p.len() - 1) as f64);
    let start = scale(n[1] - n[0], (n.len() - 1) as f64);
    Some((end, start))
}
