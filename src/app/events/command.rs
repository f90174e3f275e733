use crate::core::{ContinuityMode, CurveConfig, CurveMode, Vector2};
use crate::shared::EngineOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt anhängen
    AddControlPoint { position: Vector2 },
    /// Ersten gleichen Kontrollpunkt entfernen
    RemoveControlPoint { position: Vector2 },
    /// Alle Kontrollpunkte entfernen
    ClearControlPoints,
    /// Kurvenmodus setzen
    SetCurveMode { mode: CurveMode },
    /// Stetigkeitsmodus setzen
    SetContinuityMode { mode: ContinuityMode },
    /// Unterteilungsstufe setzen
    SetSubdivisionLevel { level: usize },
    /// Spline-Grad setzen
    SetPiecewiseDegree { degree: usize },
    /// Abtastrate setzen
    SetSamples { samples: usize },
    /// Komplette Kurven-Konfiguration ersetzen
    ApplyCurveConfig { config: CurveConfig },
    /// Engine-Optionen übernehmen
    ApplyOptions { options: EngineOptions },
    /// Engine-Optionen als TOML speichern
    SaveOptions { path: std::path::PathBuf },
    /// Kontrollpunkte im Log ausgeben
    PrintControlPoints,
}
