//! Kurvenmodell: Kontrollpunkte plus Konfiguration.
//!
//! Das Modell hält keinen Render-Zustand. Jeder Zeichenaufruf bekommt den
//! Render-Port übergeben und rechnet alles neu.

use super::strategy::{draw_polyline, DrawStrategy, DrawSummary};
use crate::core::{
    ContinuityMode, Curve, CurveConfig, CurveError, CurveMode, Vector2, MAX_SUBDIVISION_CURVES,
};
use crate::render::RenderPort;

/// Kontrollpunkte und Zeichen-Konfiguration einer Bézier-Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveModel {
    control_points: Curve,
    config: CurveConfig,
    /// Obergrenze für Teilkurven im DeCasteljau-Modus
    subdivision_limit: usize,
}

impl CurveModel {
    /// Erstellt ein leeres Modell mit Standard-Konfiguration.
    pub fn new() -> Self {
        Self::with_config(CurveConfig::default())
    }

    /// Erstellt ein leeres Modell mit vorgegebener Konfiguration.
    pub fn with_config(config: CurveConfig) -> Self {
        Self {
            control_points: Curve::new(),
            config,
            subdivision_limit: MAX_SUBDIVISION_CURVES,
        }
    }

    // ── Konfiguration ───────────────────────────────────────────────

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Ersetzt die komplette Konfiguration (Kontrollpunkte bleiben erhalten).
    pub fn set_config(&mut self, config: CurveConfig) {
        self.config = config;
    }

    pub fn curve_mode(&self) -> CurveMode {
        self.config.curve_mode
    }

    pub fn set_curve_mode(&mut self, mode: CurveMode) {
        self.config.curve_mode = mode;
    }

    pub fn continuity_mode(&self) -> ContinuityMode {
        self.config.continuity_mode
    }

    pub fn set_continuity_mode(&mut self, mode: ContinuityMode) {
        self.config.continuity_mode = mode;
    }

    pub fn subdivision_level(&self) -> usize {
        self.config.subdivide_level
    }

    pub fn set_subdivision_level(&mut self, level: usize) {
        self.config.subdivide_level = level;
    }

    pub fn piecewise_degree(&self) -> usize {
        self.config.piecewise_degree
    }

    pub fn set_piecewise_degree(&mut self, degree: usize) {
        self.config.piecewise_degree = degree;
    }

    pub fn samples(&self) -> usize {
        self.config.samples
    }

    pub fn set_samples(&mut self, samples: usize) {
        self.config.samples = samples;
    }

    pub fn subdivision_limit(&self) -> usize {
        self.subdivision_limit
    }

    pub fn set_subdivision_limit(&mut self, max_curves: usize) {
        self.subdivision_limit = max_curves;
    }

    // ── Kontrollpunkte ──────────────────────────────────────────────

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn control_points(&self) -> &[Vector2] {
        self.control_points.points()
    }

    /// Kontrollpunkt an `idx`, falls vorhanden.
    pub fn control_point(&self, idx: usize) -> Option<Vector2> {
        self.control_points.points().get(idx).copied()
    }

    /// Hängt einen Kontrollpunkt ans Ende an.
    pub fn add_control_point(&mut self, point: Vector2) {
        self.control_points.push(point);
    }

    /// Entfernt den ersten gleichen Kontrollpunkt.
    ///
    /// Der Index wird in der Kontrollpunkt-Liste selbst gesucht; ein nicht
    /// vorhandener Punkt ändert nichts und liefert `false`.
    pub fn remove_control_point(&mut self, point: Vector2) -> bool {
        let removed = self.control_points.remove_point(point);
        if !removed {
            log::debug!("Kontrollpunkt {} nicht gefunden, nichts entfernt", point);
        }
        removed
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }

    /// Gibt alle Kontrollpunkte im Log aus.
    pub fn print_control_points(&self) {
        for (idx, point) in self.control_points.points().iter().enumerate() {
            log::info!("Kontrollpunkt {}: {}", idx, point);
        }
    }

    // ── Zeichnen ────────────────────────────────────────────────────

    /// Strategie für die aktuelle Konfiguration.
    pub fn strategy(&self) -> DrawStrategy {
        DrawStrategy::select(&self.config, self.subdivision_limit)
    }

    /// Zeichnet die Kurve. Unter zwei Kontrollpunkten passiert nichts.
    pub fn draw_curve(&self, port: &mut dyn RenderPort) -> Result<DrawSummary, CurveError> {
        if !self.control_points.is_drawable() {
            return Ok(DrawSummary::default());
        }
        let strategy = self.strategy();
        let summary = strategy.draw(self.control_points.points(), port)?;
        log::debug!(
            "{:?}: {} Linien, {} Kurven",
            strategy,
            summary.lines,
            summary.curves
        );
        Ok(summary)
    }

    /// Zeichnet das Kontrollpolygon. Gibt die Linienanzahl zurück.
    pub fn draw_control_polygon(&self, port: &mut dyn RenderPort) -> usize {
        if !self.control_points.is_drawable() {
            return 0;
        }
        draw_polyline(self.control_points.points(), port)
    }

    /// Zeichnet alle Kontrollpunkte.
    pub fn draw_control_points(&self, port: &mut dyn RenderPort) {
        port.draw_points(self.control_points.points());
    }

    /// Bereitet den Port für einen neuen Frame vor.
    pub fn draw_setup(&self, port: &mut dyn RenderPort) {
        port.draw_setup();
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}
