//! Handler für Kurvenmodus, Stetigkeit und Zeichenparameter.

use crate::app::AppState;
use crate::core::{ContinuityMode, CurveConfig, CurveMode};

/// Setzt den Kurvenmodus.
pub fn set_curve_mode(state: &mut AppState, mode: CurveMode) {
    state.model.set_curve_mode(mode);
    log::info!("Kurvenmodus: {}", mode);
}

/// Setzt den Stetigkeitsmodus.
pub fn set_continuity_mode(state: &mut AppState, mode: ContinuityMode) {
    state.model.set_continuity_mode(mode);
    log::info!("Stetigkeit: {}", mode);
}

/// Setzt die Unterteilungsstufe. Warnt, wenn sie über dem Limit liegt.
pub fn set_subdivision_level(state: &mut AppState, level: usize) {
    state.model.set_subdivision_level(level);
    let within_limit = crate::core::subdivide::curve_count_for_level(level)
        .is_some_and(|count| count <= state.model.subdivision_limit());
    if !within_limit {
        log::warn!(
            "Unterteilungsstufe {} überschreitet das Limit von {} Teilkurven",
            level,
            state.model.subdivision_limit()
        );
    }
}

/// Setzt den Grad der Spline-Segmente.
pub fn set_piecewise_degree(state: &mut AppState, degree: usize) {
    state.model.set_piecewise_degree(degree);
    if degree == 0 {
        log::warn!("Spline-Grad 0 ist ungültig, Spline-Zeichnen wird fehlschlagen");
    }
}

/// Setzt die Abtastrate.
pub fn set_samples(state: &mut AppState, samples: usize) {
    state.model.set_samples(samples);
    if samples == 0 {
        log::warn!("Abtastrate 0 ist ungültig, Zeichnen wird fehlschlagen");
    }
}

/// Ersetzt die komplette Kurven-Konfiguration.
pub fn apply_curve_config(state: &mut AppState, config: CurveConfig) {
    state.model.set_config(config);
    log::info!("Kurven-Konfiguration übernommen: {:?}", config);
}
