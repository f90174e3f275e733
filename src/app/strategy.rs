//! Zeichenstrategien: Auswahl aus der Konfiguration und Ausgabe an den Render-Port.
//!
//! Jeder Durchlauf rechnet alle Punkte vollständig, bevor der erste Aufruf
//! an den Port geht. Ein Fehler hinterlässt daher keinen halben Frame.

use crate::core::{
    c0_segments, c1_segments, sample_curve, subdivide_levels, ContinuityMode, Curve, CurveConfig,
    CurveError, CurveMode, Vector2, MIN_CONTROL_POINTS,
};
use crate::render::RenderPort;

/// Zusammenfassung eines Zeichendurchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawSummary {
    /// Anzahl gezeichneter Liniensegmente
    pub lines: usize,
    /// Anzahl gezeichneter Kurven (Teilkurven bzw. Spline-Segmente)
    pub curves: usize,
}

/// Zeichenstrategie, rein aus `CurveConfig` abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStrategy {
    /// Bernstein-Auswertung an `samples` gleichen Schritten
    Baseline { samples: usize },
    /// Kontrollpolygone nach `level` Unterteilungen
    DeCasteljau { level: usize, max_curves: usize },
    /// Positionsstetige Segmente
    SplineC0 { degree: usize, samples: usize },
    /// Tangentenstetige Segmente (mit synthetischen Punkten)
    SplineC1 { degree: usize, samples: usize },
}

impl DrawStrategy {
    /// Wählt die Strategie für Kurvenmodus × Stetigkeit.
    pub fn select(config: &CurveConfig, max_curves: usize) -> Self {
        match (config.curve_mode, config.continuity_mode) {
            (CurveMode::Baseline, _) => DrawStrategy::Baseline {
                samples: config.samples,
            },
            (CurveMode::DeCasteljau, _) => DrawStrategy::DeCasteljau {
                level: config.subdivide_level,
                max_curves,
            },
            (CurveMode::Spline, ContinuityMode::C0) => DrawStrategy::SplineC0 {
                degree: config.piecewise_degree,
                samples: config.samples,
            },
            (CurveMode::Spline, ContinuityMode::C1) => DrawStrategy::SplineC1 {
                degree: config.piecewise_degree,
                samples: config.samples,
            },
        }
    }

    /// Berechnet die Polylinien, die diese Strategie für `points` zeichnen würde.
    ///
    /// Weniger als zwei Kontrollpunkte ergeben keine Polylinien.
    pub fn polylines(&self, points: &[Vector2]) -> Result<Vec<Vec<Vector2>>, CurveError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Ok(Vec::new());
        }

        match *self {
            DrawStrategy::Baseline { samples } => Ok(vec![sample_curve(points, samples)?]),
            DrawStrategy::DeCasteljau { level, max_curves } => {
                let curve = Curve::from_points(points.to_vec());
                Ok(subdivide_levels(&curve, level, max_curves)?
                    .into_iter()
                    .map(Curve::into_points)
                    .collect())
            }
            DrawStrategy::SplineC0 { degree, samples } => {
                sample_segments(&c0_segments(points, degree)?, samples)
            }
            DrawStrategy::SplineC1 { degree, samples } => {
                sample_segments(&c1_segments(points, degree)?, samples)
            }
        }
    }

    /// Zeichnet die Kurve mit dieser Strategie.
    pub fn draw(
        &self,
        points: &[Vector2],
        port: &mut dyn RenderPort,
    ) -> Result<DrawSummary, CurveError> {
        let polylines = self.polylines(points)?;
        Ok(draw_polylines(&polylines, port))
    }
}

/// Zeichnet vorab berechnete Polylinien, je Polylinie eine Kurve.
pub fn draw_polylines(polylines: &[Vec<Vector2>], port: &mut dyn RenderPort) -> DrawSummary {
    let mut summary = DrawSummary::default();
    for polyline in polylines {
        summary.lines += draw_polyline(polyline, port);
        summary.curves += 1;
    }
    summary
}

/// Tastet jedes Segment mit derselben Abtastrate ab (Baseline pro Segment).
fn sample_segments(segments: &[Curve], samples: usize) -> Result<Vec<Vec<Vector2>>, CurveError> {
    if samples == 0 {
        return Err(CurveError::InvalidSampleCount { samples });
    }
    segments
        .iter()
        .map(|segment| sample_curve(segment.points(), samples))
        .collect()
}

/// Zeichnet Linien zwischen aufeinanderfolgenden Punkten. Gibt die Linienanzahl zurück.
pub fn draw_polyline(points: &[Vector2], port: &mut dyn RenderPort) -> usize {
    for pair in points.windows(2) {
        port.draw_line(pair[0], pair[1]);
    }
    points.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    fn quadratic() -> Vec<Vector2> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 2.0),
            Vector2::new(2.0, 0.0),
        ]
    }

    fn config(mode: CurveMode, continuity: ContinuityMode) -> CurveConfig {
        CurveConfig {
            curve_mode: mode,
            continuity_mode: continuity,
            ..CurveConfig::default()
        }
    }

    #[test]
    fn test_select_covers_all_states() {
        let c = config(CurveMode::Baseline, ContinuityMode::C1);
        assert_eq!(
            DrawStrategy::select(&c, 64),
            DrawStrategy::Baseline { samples: 20 }
        );

        let c = config(CurveMode::DeCasteljau, ContinuityMode::C0);
        assert_eq!(
            DrawStrategy::select(&c, 64),
            DrawStrategy::DeCasteljau {
                level: 0,
                max_curves: 64
            }
        );

        let c = config(CurveMode::Spline, ContinuityMode::C0);
        assert!(matches!(
            DrawStrategy::select(&c, 64),
            DrawStrategy::SplineC0 { degree: 1, .. }
        ));

        let c = config(CurveMode::Spline, ContinuityMode::C1);
        assert!(matches!(
            DrawStrategy::select(&c, 64),
            DrawStrategy::SplineC1 { degree: 1, .. }
        ));
    }

    #[test]
    fn test_baseline_draws_exactly_samples_lines() {
        for samples in [1, 2, 7, 20, 100] {
            let mut list = DrawList::new();
            let summary = DrawStrategy::Baseline { samples }
                .draw(&quadratic(), &mut list)
                .expect("Zeichnen");
            assert_eq!(summary.lines, samples);
            assert_eq!(list.line_count(), samples);

            let lines: Vec<_> = list.lines().collect();
            assert_eq!(lines[0].0, Vector2::new(0.0, 0.0));
            assert_eq!(lines[samples - 1].1, Vector2::new(2.0, 0.0));
            for pair in lines.windows(2) {
                assert_eq!(pair[0].1, pair[1].0);
            }
        }
    }

    #[test]
    fn test_error_draws_nothing() {
        let mut list = DrawList::new();
        let result = DrawStrategy::SplineC0 {
            degree: 0,
            samples: 4,
        }
        .draw(&quadratic(), &mut list);
        assert_eq!(result, Err(CurveError::InvalidPiecewiseDegree { degree: 0 }));
        assert!(list.is_empty());

        let result = DrawStrategy::Baseline { samples: 0 }.draw(&quadratic(), &mut list);
        assert!(result.is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_decasteljau_draws_leaf_polygons() {
        let mut list = DrawList::new();
        let summary = DrawStrategy::DeCasteljau {
            level: 3,
            max_curves: 1024,
        }
        .draw(&quadratic(), &mut list)
        .expect("Zeichnen");
        // 8 Teilkurven mit je 3 Punkten → 2 Linien pro Teilkurve
        assert_eq!(summary.curves, 8);
        assert_eq!(summary.lines, 16);
    }

    #[test]
    fn test_single_point_is_noop() {
        let mut list = DrawList::new();
        let summary = DrawStrategy::Baseline { samples: 10 }
            .draw(&[Vector2::ONE], &mut list)
            .expect("No-op");
        assert_eq!(summary, DrawSummary::default());
        assert!(list.is_empty());
    }

    #[test]
    fn test_spline_segments_each_sampled() {
        let pts: Vec<Vector2> = (0..5).map(|i| Vector2::new(i as f64, 0.0)).collect();
        let mut list = DrawList::new();
        let summary = DrawStrategy::SplineC1 {
            degree: 2,
            samples: 6,
        }
        .draw(&pts, &mut list)
        .expect("Zeichnen");
        assert_eq!(summary.curves, 2);
        assert_eq!(summary.lines, 12);
    }
}
