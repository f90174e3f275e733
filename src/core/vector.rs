//! 2D-Vektor als Wertetyp für Kontrollpunkte und ausgewertete Kurvenpunkte.
//!
//! Das Rechnen übernimmt `glam::DVec2` (f64 für stabile Bernstein-Gewichte
//! auch bei hohem Grad). Die freien Funktionen benennen die Operationen,
//! auf denen Auswertung und Unterteilung aufbauen.

use glam::DVec2;

/// Unveränderlicher 2D-Punkt/Vektor. `Display` gibt `[x, y]` aus.
pub type Vector2 = DVec2;

/// Komponentenweise Addition `a + b`.
#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    a + b
}

/// Skalierung `v · s`.
#[inline]
pub fn scale(v: Vector2, s: f64) -> Vector2 {
    v * s
}

/// Mittelpunkt `0.5·a + 0.5·b` (de-Casteljau-Schritt bei t = 0.5).
#[inline]
pub fn midpoint(a: Vector2, b: Vector2) -> Vector2 {
    add(scale(a, 0.5), scale(b, 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_and_scale() {
        let v = add(Vector2::new(1.0, 2.0), Vector2::new(3.0, -1.0));
        assert_relative_eq!(v.x, 4.0);
        assert_relative_eq!(v.y, 1.0);

        let s = scale(v, 0.5);
        assert_relative_eq!(s.x, 2.0);
        assert_relative_eq!(s.y, 0.5);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Vector2::new(0.0, 0.0), Vector2::new(1.0, 2.0));
        assert_relative_eq!(m.x, 0.5);
        assert_relative_eq!(m.y, 1.0);
    }
}
