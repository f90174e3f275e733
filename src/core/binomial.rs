//! Binomialkoeffizienten für die Bernstein-Basis.

/// Berechnet `n über k` multiplikativ mit laufender Division.
///
/// Gibt `None` zurück, wenn `k < 0` oder `n < k` (Koeffizient nicht definiert).
/// Die Zwischenergebnisse bleiben durch die Division in jedem Schritt klein;
/// für kleine `k` ist das Ergebnis ganzzahlig exakt, für große `k` werden
/// Rundungsfehler in Kauf genommen.
pub fn n_choose_k(n: i64, k: i64) -> Option<f64> {
    if k < 0 || n < k {
        return None;
    }

    let mut result = 1.0f64;
    for i in 1..=k {
        result *= (n - (k - i)) as f64;
        result /= i as f64;
    }
    Some(result)
}

/// Bernstein-Gewicht `nCk(m, i) · t^i · (1-t)^(m-i)` von Kontrollpunkt `i`.
///
/// `None` für `i > m`. Bei `t = 0` und `t = 1` ist das Gewicht exakt 0 oder 1.
/// Läuft das direkte Produkt über (hoher Grad), wird im Logarithmus gerechnet.
pub fn bernstein_weight(m: usize, i: usize, t: f64) -> Option<f64> {
    if i > m {
        return None;
    }
    if t == 0.0 {
        return Some(if i == 0 { 1.0 } else { 0.0 });
    }
    if t == 1.0 {
        return Some(if i == m { 1.0 } else { 0.0 });
    }

    let coefficient = n_choose_k(m as i64, i as i64)?;
    let direct = coefficient * t.powi(i as i32) * (1.0 - t).powi((m - i) as i32);
    if direct.is_finite() {
        return Some(direct);
    }
    Some(log_space_weight(m, i, t))
}

/// `ln nCk(m, i)` als Summe, damit kein Zwischenergebnis überläuft.
fn ln_n_choose_k(m: usize, i: usize) -> f64 {
    (1..=i)
        .map(|j| ((m - i + j) as f64 / j as f64).ln())
        .sum()
}

/// Gewicht über `exp(ln nCk + i·ln t + (m-i)·ln|1-t|)`.
///
/// Für `t` knapp über 1 ist `1 - t` negativ; das Vorzeichen folgt aus `m - i`.
fn log_space_weight(m: usize, i: usize, t: f64) -> f64 {
    let inv = 1.0 - t;
    let ln_weight =
        ln_n_choose_k(m, i) + i as f64 * t.ln() + (m - i) as f64 * inv.abs().ln();
    let magnitude = ln_weight.exp();
    if inv < 0.0 && (m - i) % 2 == 1 {
        -magnitude
    } else {
        magnitude
    }
}
