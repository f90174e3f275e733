//! Vertex-Typ für die Übergabe an GPU-Backends.

use bytemuck::{Pod, Zeroable};

/// Vertex einer Linie oder eines Punkts (f32, wie es Vertex-Buffer erwarten)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position im 2D-Raum
    pub position: [f32; 2],
}

impl Vertex {
    /// Konvertiert einen Kurvenpunkt (f64) in einen Vertex.
    pub fn from_point(p: crate::core::Vector2) -> Self {
        Self {
            position: [p.x as f32, p.y as f32],
        }
    }

    /// Rohbytes einer Vertex-Liste für Buffer-Uploads.
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
