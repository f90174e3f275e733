//! Fehlertypen der Kurven-Mathematik.

use thiserror::Error;

/// Fehler, die bei Auswertung, Unterteilung und Spline-Aufteilung auftreten können.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Zu wenige Kontrollpunkte für die Operation.
    #[error("not enough control points: need at least {required}, got {actual}")]
    NotEnoughControlPoints {
        /// Mindestanzahl
        required: usize,
        /// Tatsächliche Anzahl
        actual: usize,
    },

    /// Parameter `t` liegt außerhalb von `[0, T_MAX]`.
    #[error("curve parameter t = {t} is outside the valid domain")]
    ParameterOutOfRange {
        /// Übergebener Parameter
        t: f64,
    },

    /// Binomialkoeffizient ist für `(n, k)` nicht definiert.
    #[error("binomial coefficient C({n}, {k}) is undefined")]
    UndefinedCoefficient {
        /// Obere Zahl
        n: i64,
        /// Untere Zahl
        k: i64,
    },

    /// Spline-Grad muss mindestens 1 sein.
    #[error("piecewise degree must be at least 1, got {degree}")]
    InvalidPiecewiseDegree {
        /// Konfigurierter Grad
        degree: usize,
    },

    /// Abtastrate muss mindestens 1 sein.
    #[error("sample count must be at least 1, got {samples}")]
    InvalidSampleCount {
        /// Konfigurierte Abtastrate
        samples: usize,
    },

    /// `2^level` Teilkurven würden die Obergrenze überschreiten.
    #[error("subdivision level {level} exceeds the limit of {max_curves} curves")]
    SubdivisionLimitExceeded {
        /// Angeforderte Stufe
        level: usize,
        /// Erlaubte Anzahl Teilkurven
        max_curves: usize,
    },
}
