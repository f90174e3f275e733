//! Bézier-Kurve beliebigen Grades und ihre Auswertung in der Bernstein-Basis.

use super::binomial::bernstein_weight;
use super::error::CurveError;
use super::vector::{add, scale, Vector2};
use serde::{Deserialize, Serialize};

/// Obere Grenze für `t`. Etwas über 1.0, damit Abtastung mit festem
/// Schritt nicht an Gleitkomma-Akkumulation scheitert.
pub const T_MAX: f64 = 1.000005;

/// Mindestanzahl Kontrollpunkte für Auswertung und Unterteilung.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Geordnete Kontrollpunkte einer Bézier-Kurve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<Vector2>,
}

impl Curve {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt eine Kurve aus vorhandenen Kontrollpunkten.
    pub fn from_points(points: Vec<Vector2>) -> Self {
        Self { points }
    }

    /// Read-only Sicht auf die Kontrollpunkte.
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Gibt die Kontrollpunkte zurück und verbraucht die Kurve.
    pub fn into_points(self) -> Vec<Vector2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grad = Anzahl Kontrollpunkte − 1 (`None` für leere Kurven).
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// True wenn die Kurve genug Punkte hat, um Linien zu erzeugen.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_CONTROL_POINTS
    }

    pub fn first(&self) -> Option<Vector2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vector2> {
        self.points.last().copied()
    }

    /// Hängt einen Kontrollpunkt an.
    pub fn push(&mut self, point: Vector2) {
        self.points.push(point);
    }

    /// Entfernt den ersten exakt gleichen Punkt. `false` wenn nicht gefunden.
    pub fn remove_point(&mut self, point: Vector2) -> bool {
        match self.points.iter().position(|p| *p == point) {
            Some(idx) => {
                self.points.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Wertet die Kurve bei `t` aus (siehe [`eval_curve`]).
    pub fn eval(&self, t: f64) -> Result<Vector2, CurveError> {
        eval_curve(&self.points, t)
    }
}

impl From<Vec<Vector2>> for Curve {
    fn from(points: Vec<Vector2>) -> Self {
        Self::from_points(points)
    }
}

/// Wertet eine Bézier-Kurve bei `t` aus.
///
/// B(t) = Σ nCk(m, i) · t^i · (1-t)^(m-i) · P_i mit m = Grad.
///
/// Bei t = 0 und t = 1 kollabieren die Gewichte auf einen einzigen Punkt,
/// die Endpunkte werden also exakt getroffen, auch bei sehr hohem Grad.
pub fn eval_curve(points: &[Vector2], t: f64) -> Result<Vector2, CurveError> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(CurveError::NotEnoughControlPoints {
            required: MIN_CONTROL_POINTS,
            actual: points.len(),
        });
    }
    // NaN fällt durch beide Vergleiche und landet ebenfalls hier
    if !(0.0..=T_MAX).contains(&t) {
        return Err(CurveError::ParameterOutOfRange { t });
    }

    let m = points.len() - 1;
    let mut result = Vector2::ZERO;
    for (i, &p) in points.iter().enumerate() {
        let weight = bernstein_weight(m, i, t).ok_or(CurveError::UndefinedCoefficient {
            n: m as i64,
            k: i as i64,
        })?;
        result = add(result, scale(p, weight));
    }
    Ok(result)
}

/// Wertet die Kurve an `samples + 1` gleichverteilten Stellen `t = i / samples` aus.
///
/// `t` wird pro Schritt neu berechnet statt aufaddiert.
pub fn sample_curve(points: &[Vector2], samples: usize) -> Result<Vec<Vector2>, CurveError> {
    if samples == 0 {
        return Err(CurveError::InvalidSampleCount { samples });
    }
    (0..=samples)
        .map(|i| eval_curve(points, i as f64 / samples as f64))
        .collect()
}
