//! Render-Port: Schnittstelle zwischen Kurven-Engine und Zeichenziel.
//!
//! Die Engine kennt kein konkretes Grafik-Backend. Jede Zeichenoperation
//! bekommt den Port explizit übergeben; `DrawList` zeichnet die Aufrufe
//! nur auf (Test-Double und Headless-Ausgabe).

mod draw_list;
mod types;

pub use draw_list::{DrawCall, DrawList};
pub use types::Vertex;

use crate::core::Vector2;

/// Zeichenziel für Punkte und Liniensegmente.
pub trait RenderPort {
    /// Bereitet das Zeichenziel für einen neuen Frame vor.
    fn draw_setup(&mut self);

    /// Löscht das Zeichenziel.
    fn clear(&mut self);

    /// Zeichnet alle Punkte. Leere Listen sind ein No-op.
    fn draw_points(&mut self, points: &[Vector2]);

    /// Zeichnet ein Liniensegment von `p1` nach `p2`.
    fn draw_line(&mut self, p1: Vector2, p2: Vector2);
}
