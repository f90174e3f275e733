use approx::assert_relative_eq;
use curve_engine::core::{c0_segments, c1_segments, junction_tangents, segment_count};
use curve_engine::{
    eval_curve, n_choose_k, subdivide, ContinuityMode, CurveConfig, CurveMode, CurveModel,
    DrawList, DrawStrategy, Vector2,
};

fn quadratic() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(2.0, 0.0),
    ]
}

fn five_points() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 3.0),
        Vector2::new(3.0, 3.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(6.0, 1.0),
    ]
}

fn model_with(points: &[Vector2], config: CurveConfig) -> CurveModel {
    let mut model = CurveModel::with_config(config);
    for &p in points {
        model.add_control_point(p);
    }
    model
}

#[test]
fn test_quadratic_midpoint_evaluation() {
    let p = eval_curve(&quadratic(), 0.5).expect("Auswertung sollte gelingen");
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_quadratic_subdivision_halves() {
    let (left, right) = subdivide(&quadratic()).expect("Unterteilung sollte gelingen");
    assert_eq!(
        left.points(),
        &[
            Vector2::new(0.0, 0.0),
            Vector2::new(0.5, 1.0),
            Vector2::new(1.0, 1.0)
        ]
    );
    assert_eq!(
        right.points(),
        &[
            Vector2::new(1.0, 1.0),
            Vector2::new(1.5, 1.0),
            Vector2::new(2.0, 0.0)
        ]
    );
}

#[test]
fn test_binomial_scenarios() {
    assert_eq!(n_choose_k(4, 2), Some(6.0));
    assert_eq!(n_choose_k(5, 6), None);
}

#[test]
fn test_five_points_degree_two_windows() {
    let points = five_points();
    assert_eq!(segment_count(points.len(), 2), 2);

    let segments = c0_segments(&points, 2).expect("C0-Segmente");
    assert_eq!(segments[0].points(), &points[0..=2]);
    assert_eq!(segments[1].points(), &points[2..=4]);
}

#[test]
fn test_c1_junction_tangents_match() {
    let segments = c1_segments(&five_points(), 2).expect("C1-Segmente");
    assert_eq!(segments.len(), 2);

    let (outgoing, incoming) =
        junction_tangents(&segments[0], &segments[1]).expect("Tangenten an der Naht");
    assert_relative_eq!(outgoing.x, incoming.x, epsilon = 1e-12);
    assert_relative_eq!(outgoing.y, incoming.y, epsilon = 1e-12);
}

#[test]
fn test_baseline_draw_issues_k_lines() {
    for samples in [1, 7, 32] {
        let model = model_with(
            &quadratic(),
            CurveConfig {
                samples,
                ..CurveConfig::default()
            },
        );
        let mut list = DrawList::new();
        let summary = model.draw_curve(&mut list).expect("Baseline zeichnen");
        assert_eq!(summary.lines, samples);
        assert_eq!(list.line_count(), samples);

        let (first, _) = list.lines().next().expect("mindestens eine Linie");
        let (_, last) = list.lines().last().expect("mindestens eine Linie");
        assert_relative_eq!(first.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.x, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_de_casteljau_draw_connects_endpoints() {
    let model = model_with(
        &quadratic(),
        CurveConfig {
            curve_mode: CurveMode::DeCasteljau,
            subdivide_level: 3,
            ..CurveConfig::default()
        },
    );
    let mut list = DrawList::new();
    let summary = model.draw_curve(&mut list).expect("De Casteljau zeichnen");

    assert_eq!(summary.curves, 8);
    assert_eq!(summary.lines, 16);
    let (first, _) = list.lines().next().expect("erste Linie");
    let (_, last) = list.lines().last().expect("letzte Linie");
    assert_eq!(first, Vector2::new(0.0, 0.0));
    assert_eq!(last, Vector2::new(2.0, 0.0));
}

#[test]
fn test_spline_draws_are_position_continuous() {
    for continuity_mode in [ContinuityMode::C0, ContinuityMode::C1] {
        let config = CurveConfig {
            curve_mode: CurveMode::Spline,
            continuity_mode,
            piecewise_degree: 2,
            samples: 10,
            ..CurveConfig::default()
        };
        let strategy = DrawStrategy::select(&config, 1 << 16);
        let polylines = strategy.polylines(&five_points()).expect("Spline");

        assert_eq!(polylines.len(), 2);
        let end = *polylines[0].last().expect("Segment 0 hat Punkte");
        let start = polylines[1][0];
        assert_relative_eq!(end.x, start.x, epsilon = 1e-12);
        assert_relative_eq!(end.y, start.y, epsilon = 1e-12);
    }
}

#[test]
fn test_draw_is_idempotent() {
    let model = model_with(
        &five_points(),
        CurveConfig {
            curve_mode: CurveMode::Spline,
            continuity_mode: ContinuityMode::C1,
            ..CurveConfig::default()
        },
    );
    let mut first = DrawList::new();
    let mut second = DrawList::new();
    model.draw_curve(&mut first).expect("erster Durchlauf");
    model.draw_curve(&mut second).expect("zweiter Durchlauf");
    assert_eq!(first, second);
}

#[test]
fn test_single_point_draws_nothing() {
    let model = model_with(&[Vector2::new(1.0, 1.0)], CurveConfig::default());
    let mut list = DrawList::new();
    let summary = model.draw_curve(&mut list).expect("kein Fehler");
    assert_eq!(summary.lines, 0);
    assert_eq!(list.line_count(), 0);
}

#[test]
fn test_high_degree_baseline_draw_is_finite() {
    let points: Vec<Vector2> = (0..1200)
        .map(|i| Vector2::new(i as f64, ((i % 7) as f64) - 3.0))
        .collect();
    let model = model_with(&points, CurveConfig::default());

    let mut list = DrawList::new();
    let summary = model.draw_curve(&mut list).expect("Baseline zeichnen");
    assert_eq!(summary.lines, CurveConfig::default().samples);
    assert!(list.lines().all(|(a, b)| a.is_finite() && b.is_finite()));

    let (first, _) = list.lines().next().expect("erste Linie");
    let (_, last) = list.lines().last().expect("letzte Linie");
    assert_eq!(first, points[0]);
    assert_eq!(last, points[points.len() - 1]);
}
