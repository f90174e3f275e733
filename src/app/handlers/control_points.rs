//! Handler für das Bearbeiten der Kontrollpunkt-Liste.

use crate::app::AppState;
use crate::core::Vector2;

/// Hängt einen Kontrollpunkt an.
pub fn add(state: &mut AppState, position: Vector2) {
    state.model.add_control_point(position);
    log::debug!(
        "Kontrollpunkt {} hinzugefügt ({} gesamt)",
        position,
        state.model.control_points().len()
    );
}

/// Entfernt den ersten gleichen Kontrollpunkt, sonst No-op.
pub fn remove(state: &mut AppState, position: Vector2) {
    if state.model.remove_control_point(position) {
        log::debug!("Kontrollpunkt {} entfernt", position);
    }
}

/// Entfernt alle Kontrollpunkte.
pub fn clear(state: &mut AppState) {
    let count = state.model.control_points().len();
    state.model.clear_control_points();
    log::info!("{} Kontrollpunkte verworfen", count);
}

/// Gibt alle Kontrollpunkte im Log aus.
pub fn print(state: &AppState) {
    state.model.print_control_points();
}
