//! De-Casteljau-Unterteilung bei t = 0.5.
//!
//! Rekursive Unterteilung läuft über eine explizite Arbeitsliste statt über
//! den Call-Stack; die Anzahl erzeugter Teilkurven ist nach oben begrenzt.

use super::curve::{Curve, MIN_CONTROL_POINTS};
use super::error::CurveError;
use super::vector::{midpoint, Vector2};

/// Standard-Obergrenze für die Anzahl Teilkurven (entspricht Stufe 16).
pub const MAX_SUBDIVISION_CURVES: usize = 1 << 16;

/// Teilt eine Kurve bei t = 0.5 in eine linke und eine rechte Hälfte.
///
/// Beide Hälften haben so viele Kontrollpunkte wie das Original.
/// `left.last() == right.first() == B(0.5)`.
pub fn subdivide(points: &[Vector2]) -> Result<(Curve, Curve), CurveError> {
    let n = points.len();
    if n < MIN_CONTROL_POINTS {
        return Err(CurveError::NotEnoughControlPoints {
            required: MIN_CONTROL_POINTS,
            actual: n,
        });
    }

    let mut working = points.to_vec();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    left.push(points[0]);
    right.push(points[n - 1]);

    for pass in 1..n {
        // Jeder Durchlauf verkürzt die Arbeitsliste um ein Element
        for i in 0..n - pass {
            working[i] = midpoint(working[i], working[i + 1]);
        }
        left.push(working[0]);
        right.push(working[n - pass - 1]);
    }

    // Rechte Hälfte wurde vom Ende her aufgebaut
    right.reverse();
    Ok((Curve::from_points(left), Curve::from_points(right)))
}

/// Anzahl Teilkurven nach `level` Unterteilungen, `None` bei Überlauf.
pub fn curve_count_for_level(level: usize) -> Option<usize> {
    u32::try_from(level)
        .ok()
        .and_then(|l| 1usize.checked_shl(l))
}

/// Unterteilt `curve` `level`-mal und liefert `2^level` Teilkurven von links nach rechts.
///
/// Schlägt vor jeder Arbeit fehl, wenn `2^level` größer als `max_curves` wäre.
pub fn subdivide_levels(
    curve: &Curve,
    level: usize,
    max_curves: usize,
) -> Result<Vec<Curve>, CurveError> {
    let total = curve_count_for_level(level)
        .filter(|&count| count <= max_curves)
        .ok_or(CurveError::SubdivisionLimitExceeded { level, max_curves })?;

    if !curve.is_drawable() {
        return Err(CurveError::NotEnoughControlPoints {
            required: MIN_CONTROL_POINTS,
            actual: curve.len(),
        });
    }

    let mut worklist = vec![curve.clone()];
    for _ in 0..level {
        let mut next = Vec::with_capacity(worklist.len() * 2);
        for c in &worklist {
            let (left, right) = subdivide(c.points())?;
            next.push(left);
            next.push(right);
        }
        worklist = next;
    }

    debug_assert_eq!(worklist.len(), total);
    Ok(worklist)
}

/// Maximaler Abstand eines Kontrollpunkts aus `curves` zur dicht abgetasteten Referenzkurve.
///
/// Misst, wie gut die Kontrollpolygone der Teilkurven die echte Kurve annähern.
pub fn control_polygon_deviation(
    curves: &[Curve],
    reference: &Curve,
    samples: usize,
) -> Result<f64, CurveError> {
    let polyline = super::curve::sample_curve(reference.points(), samples)?;

    let mut max_dist = 0.0f64;
    for point in curves.iter().flat_map(|c| c.points().iter().copied()) {
        let nearest = polyline
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min);
        max_dist = max_dist.max(nearest);
    }
    Ok(max_dist)
}

fn distance_to_segment(p: Vector2, a: Vector2, b: Vector2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
