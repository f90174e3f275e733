//! Handler für Engine-Optionen.

use crate::app::AppState;
use crate::shared::EngineOptions;
use anyhow::Context;
use std::path::Path;

/// Übernimmt neue Optionen; das Teilkurven-Limit wirkt sofort auf das Modell.
pub fn apply(state: &mut AppState, options: EngineOptions) {
    state.model.set_subdivision_limit(options.max_subdivision_curves);
    state.options = options;
    log::info!("Engine-Optionen übernommen");
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state
        .options
        .save_to_file(path)
        .with_context(|| format!("Optionen konnten nicht gespeichert werden: {}", path.display()))
}
