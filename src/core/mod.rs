//! Core-Kurvenmathematik: Vektoren, Binomialkoeffizienten, Bézier-Auswertung,
//! De-Casteljau-Unterteilung und stückweise Splines.
//!
//! Reine Funktionen über Wertetypen, ohne Zustand zwischen Aufrufen.

pub mod binomial;
pub mod config;
pub mod curve;
pub mod error;
pub mod spline;
pub mod subdivide;
pub mod vector;

pub use binomial::{bernstein_weight, n_choose_k};
pub use config::{ContinuityMode, CurveConfig, CurveMode};
pub use curve::{eval_curve, sample_curve, Curve, MIN_CONTROL_POINTS, T_MAX};
pub use error::CurveError;
pub use spline::{c0_segments, c1_segments, junction_tangents, segment_count, segment_ranges};
pub use subdivide::{
    control_polygon_deviation, subdivide, subdivide_levels, MAX_SUBDIVISION_CURVES,
};
pub use vector::Vector2;
