use crate::core::{ContinuityMode, CurveMode, Vector2};
use crate::shared::EngineOptions;

/// Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neuer Kontrollpunkt wurde platziert
    ControlPointPlaced { position: Vector2 },
    /// Kontrollpunkt soll entfernt werden
    ControlPointRemoved { position: Vector2 },
    /// Alle Kontrollpunkte verwerfen
    ControlPointsCleared,
    /// Kurvenmodus gewählt
    CurveModeSelected { mode: CurveMode },
    /// Stetigkeitsmodus gewählt
    ContinuityModeSelected { mode: ContinuityMode },
    /// Unterteilungsstufe geändert
    SubdivisionLevelChanged { level: usize },
    /// Spline-Grad geändert
    PiecewiseDegreeChanged { degree: usize },
    /// Abtastrate geändert
    SamplesChanged { samples: usize },
    /// Konfiguration auf die Standardwerte aus den Optionen zurücksetzen
    ConfigResetRequested,
    /// Neue Engine-Optionen übernehmen
    OptionsChanged { options: EngineOptions },
    /// Optionen in Datei speichern
    OptionsSaveRequested { path: std::path::PathBuf },
    /// Kontrollpunkte im Log ausgeben
    PrintControlPointsRequested,
}
