//! Zentrale Konfiguration der Kurven-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveConfig, MAX_SUBDIVISION_CURVES};
use serde::{Deserialize, Serialize};

// ── Frame-Aufbau ────────────────────────────────────────────────────

/// Kontrollpolygon standardmäßig mitzeichnen.
pub const SHOW_CONTROL_POLYGON: bool = true;
/// Kontrollpunkte standardmäßig mitzeichnen.
pub const SHOW_CONTROL_POINTS: bool = true;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `curve_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Limits ──────────────────────────────────────────────────
    /// Maximale Anzahl Teilkurven im DeCasteljau-Modus (2^level ≤ Limit)
    #[serde(default = "default_max_subdivision_curves")]
    pub max_subdivision_curves: usize,

    // ── Frame ───────────────────────────────────────────────────
    /// Kontrollpolygon pro Frame zeichnen
    #[serde(default = "default_show_control_polygon")]
    pub show_control_polygon: bool,
    /// Kontrollpunkte pro Frame zeichnen
    #[serde(default = "default_show_control_points")]
    pub show_control_points: bool,

    // ── Kurve ───────────────────────────────────────────────────
    /// Konfiguration für neue bzw. zurückgesetzte Modelle
    #[serde(default)]
    pub default_curve: CurveConfig,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_subdivision_curves: MAX_SUBDIVISION_CURVES,
            show_control_polygon: SHOW_CONTROL_POLYGON,
            show_control_points: SHOW_CONTROL_POINTS,
            default_curve: CurveConfig::default(),
        }
    }
}

/// Serde-Default für `max_subdivision_curves`.
fn default_max_subdivision_curves() -> usize {
    MAX_SUBDIVISION_CURVES
}

fn default_show_control_polygon() -> bool {
    SHOW_CONTROL_POLYGON
}

fn default_show_control_points() -> bool {
    SHOW_CONTROL_POINTS
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_engine.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContinuityMode, CurveMode};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("curve_engine_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut options = EngineOptions::default();
        options.default_curve.curve_mode = CurveMode::Spline;
        options.default_curve.continuity_mode = ContinuityMode::C1;
        options.max_subdivision_curves = 256;
        options.show_control_points = false;

        options.save_to_file(&path).expect("Speichern");
        let loaded = EngineOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = EngineOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, EngineOptions::default());
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let path = temp_path("broken");
        std::fs::write(&path, "max_subdivision_curves = \"viele\"").expect("Schreiben");
        let loaded = EngineOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, EngineOptions::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let options: EngineOptions = toml::from_str(
            r#"
            show_control_polygon = false

            [default_curve]
            samples = 64
            "#,
        )
        .expect("TOML");
        assert!(!options.show_control_polygon);
        assert!(options.show_control_points);
        assert_eq!(options.default_curve.samples, 64);
        assert_eq!(options.max_subdivision_curves, MAX_SUBDIVISION_CURVES);
    }
}
