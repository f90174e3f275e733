//! Application State: zentrale Datenhaltung.

use super::model::CurveModel;
use super::CommandLog;
use crate::shared::EngineOptions;

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Kontrollpunkte und Kurven-Konfiguration
    pub model: CurveModel,
    /// Laufzeit-Optionen (Standard-Konfiguration, Limits, Frame-Aufbau)
    pub options: EngineOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Erstellt einen leeren State; das Modell übernimmt Konfiguration und Limit aus `options`.
    pub fn with_options(options: EngineOptions) -> Self {
        let mut model = CurveModel::with_config(options.default_curve);
        model.set_subdivision_limit(options.max_subdivision_curves);
        Self {
            model,
            options,
            command_log: CommandLog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
