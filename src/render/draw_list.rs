//! Aufzeichnender Render-Port.

use super::{RenderPort, Vertex};
use crate::core::Vector2;
use serde::Serialize;

/// Ein aufgezeichneter Zeichenaufruf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    /// Frame vorbereitet
    Setup,
    /// Zeichenziel gelöscht
    Clear,
    /// Punkte gezeichnet
    Points { points: Vec<Vector2> },
    /// Liniensegment gezeichnet
    Line { from: Vector2, to: Vector2 },
}

/// Zeichnet alle Aufrufe in Reihenfolge auf.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    /// Erstellt eine leere Aufzeichnung.
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Read-only Sicht auf alle Aufrufe.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Alle gezeichneten Liniensegmente in Reihenfolge.
    pub fn lines(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Anzahl gezeichneter Liniensegmente.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Liniensegmente als Vertex-Paare (GL_LINES-Layout).
    pub fn line_vertices(&self) -> Vec<Vertex> {
        self.lines()
            .flat_map(|(from, to)| [Vertex::from_point(from), Vertex::from_point(to)])
            .collect()
    }

    /// Verwirft alle Aufzeichnungen.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl RenderPort for DrawList {
    fn draw_setup(&mut self) {
        self.calls.push(DrawCall::Setup);
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_points(&mut self, points: &[Vector2]) {
        if points.is_empty() {
            return;
        }
        self.calls.push(DrawCall::Points {
            points: points.to_vec(),
        });
    }

    fn draw_line(&mut self, p1: Vector2, p2: Vector2) {
        self.calls.push(DrawCall::Line { from: p1, to: p2 });
    }
}
