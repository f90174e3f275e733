//! Kurvenmodus, Stetigkeit und Zeichen-Konfiguration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard-Abtastrate (Liniensegmente pro Kurve im Baseline-Modus).
pub const DEFAULT_SAMPLES: usize = 20;
/// Standard-Grad der Spline-Segmente.
pub const DEFAULT_PIECEWISE_DEGREE: usize = 1;
/// Standard-Unterteilungsstufe.
pub const DEFAULT_SUBDIVIDE_LEVEL: usize = 0;

/// Zeichenmodus der Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveMode {
    /// Bernstein-Auswertung an gleichverteilten t-Werten
    #[default]
    Baseline,
    /// Kontrollpolygone nach rekursiver Unterteilung
    DeCasteljau,
    /// Stückweise Segmente mit konfigurierbarer Stetigkeit
    Spline,
}

/// Stetigkeit an Segmentgrenzen (nur im Spline-Modus relevant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContinuityMode {
    /// Gemeinsamer Endpunkt
    #[default]
    C0,
    /// Gemeinsamer Endpunkt und gleiche Tangente
    C1,
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveMode::Baseline => "Baseline",
            CurveMode::DeCasteljau => "DeCasteljau",
            CurveMode::Spline => "Spline",
        };
        f.write_str(name)
    }
}

impl FromStr for CurveMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Baseline" => Ok(CurveMode::Baseline),
            "DeCasteljau" => Ok(CurveMode::DeCasteljau),
            "Spline" => Ok(CurveMode::Spline),
            other => anyhow::bail!("Unbekannter Kurvenmodus: {other}"),
        }
    }
}

impl fmt::Display for ContinuityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContinuityMode::C0 => "C0",
            ContinuityMode::C1 => "C1",
        })
    }
}

impl FromStr for ContinuityMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C0" => Ok(ContinuityMode::C0),
            "C1" => Ok(ContinuityMode::C1),
            other => anyhow::bail!("Unbekannter Stetigkeitsmodus: {other}"),
        }
    }
}

/// Konfiguration eines Zeichendurchlaufs.
///
/// Setter validieren nicht; ungültige Werte (Grad 0, Abtastrate 0) werden
/// erst beim Zeichnen als Fehler gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Zeichenmodus
    pub curve_mode: CurveMode,
    /// Stetigkeit im Spline-Modus
    pub continuity_mode: ContinuityMode,
    /// Anzahl Unterteilungen im DeCasteljau-Modus (2^level Teilkurven)
    pub subdivide_level: usize,
    /// Grad der Spline-Segmente (≥ 1)
    pub piecewise_degree: usize,
    /// Liniensegmente pro Kurve bzw. Segment (≥ 1)
    pub samples: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            curve_mode: CurveMode::Baseline,
            continuity_mode: ContinuityMode::C0,
            subdivide_level: DEFAULT_SUBDIVIDE_LEVEL,
            piecewise_degree: DEFAULT_PIECEWISE_DEGREE,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fresh_drawing_tool() {
        let config = CurveConfig::default();
        assert_eq!(config.curve_mode, CurveMode::Baseline);
        assert_eq!(config.continuity_mode, ContinuityMode::C0);
        assert_eq!(config.subdivide_level, 0);
        assert_eq!(config.piecewise_degree, 1);
        assert_eq!(config.samples, 20);
    }

    #[test]
    fn test_mode_names_roundtrip_through_strings() {
        for mode in [CurveMode::Baseline, CurveMode::DeCasteljau, CurveMode::Spline] {
            assert_eq!(mode.to_string().parse::<CurveMode>().unwrap(), mode);
        }
        assert_eq!("C1".parse::<ContinuityMode>().unwrap(), ContinuityMode::C1);
        assert!("Hermite".parse::<CurveMode>().is_err());
        assert!("C2".parse::<ContinuityMode>().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CurveConfig = toml::from_str(
            r#"
            curve_mode = "Spline"
            piecewise_degree = 3
            "#,
        )
        .expect("TOML");
        assert_eq!(config.curve_mode, CurveMode::Spline);
        assert_eq!(config.piecewise_degree, 3);
        assert_eq!(config.samples, DEFAULT_SAMPLES);
    }
}
