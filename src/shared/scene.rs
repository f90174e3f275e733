//! Szenen-Datei für headless Zeichnen: Kontrollpunkte plus Kurven-Konfiguration.

use crate::app::CurveModel;
use crate::core::{CurveConfig, Vector2};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inhalt einer Szenen-Datei (TOML).
///
/// ```toml
/// control_points = [[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]
///
/// [config]
/// curve_mode = "DeCasteljau"
/// subdivide_level = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Kontrollpunkte in Reihenfolge
    #[serde(default)]
    pub control_points: Vec<Vector2>,
    /// Überschreibt die Standard-Konfiguration, falls gesetzt
    #[serde(default)]
    pub config: Option<CurveConfig>,
}

impl Scene {
    /// Parst eine Szene aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Szenen-Datei ist kein gültiges TOML")
    }

    /// Lädt eine Szene aus einer Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenen-Datei nicht lesbar: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Überträgt Kontrollpunkte und (falls vorhanden) Konfiguration auf ein Modell.
    pub fn apply_to(&self, model: &mut CurveModel) {
        if let Some(config) = self.config {
            model.set_config(config);
        }
        model.clear_control_points();
        for &point in &self.control_points {
            model.add_control_point(point);
        }
    }
}
