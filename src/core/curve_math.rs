//! Kubische Bézier-Mathematik in Polynomform.
//!
//! Ein Segment zwischen zwei Ankerpunkten wird über seine vier Punkte
//! (Anker P0/P1, Tangentenpunkte G0/G1) in Polynomkoeffizienten umgerechnet:
//!
//! ```text
//! x(t) = a0 + a1·t + a2·t² + a3·t³
//! y(t) = b0 + b1·t + b2·t² + b3·t³      t ∈ [0, 1]
//! ```

use glam::Vec2;
use std::fmt;

/// Unveränderliche Polynomkoeffizienten eines kubischen Segments.
///
/// Index = Potenz von t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub x: [f32; 4],
    pub y: [f32; 4],
}

impl CubicCoefficients {
    /// Leitet die Koeffizienten aus Anker/Tangenten-Quadrupel ab.
    ///
    /// - `p0`: Start-Anker (t = 0)
    /// - `p1`: End-Anker (t = 1)
    /// - `g0`: ausgehender Tangentenpunkt von `p0`
    /// - `g1`: eingehender Tangentenpunkt von `p1`
    ///
    /// Zusammenfallende Punkte sind erlaubt und ergeben eine entartete Kurve.
    pub fn derive(p0: Vec2, p1: Vec2, g0: Vec2, g1: Vec2) -> Self {
        let c1 = 3.0 * (g0 - p0);
        let c2 = 3.0 * (p0 + g1 - 2.0 * g0);
        let c3 = p1 - p0 + 3.0 * g0 - 3.0 * g1;
        Self {
            x: [p0.x, c1.x, c2.x, c3.x],
            y: [p0.y, c1.y, c2.y, c3.y],
        }
    }

    /// Wertet das Polynom an der Stelle `t` aus (Horner-Schema).
    ///
    /// Geometrisch sinnvoll für t ∈ [0, 1], aber für jedes reelle t definiert.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        Vec2::new(horner(&self.x, t), horner(&self.y, t))
    }
}

fn horner(c: &[f32; 4], t: f32) -> f32 {
    c[0] + t * (c[1] + t * (c[2] + t * c[3]))
}

impl fmt::Display for CubicCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1, a2, a3] = self.x;
        let [b0, b1, b2, b3] = self.y;
        writeln!(f, "x(t) = {a0} + {a1}t + {a2}t^2 + {a3}t^3")?;
        write!(f, "y(t) = {b0} + {b1}t + {b2}t^2 + {b3}t^3")
    }
}

/// Freie Funktion zu [`CubicCoefficients::derive`].
pub fn derive_coefficients(p0: Vec2, p1: Vec2, g0: Vec2, g1: Vec2) -> CubicCoefficients {
    CubicCoefficients::derive(p0, p1, g0, g1)
}

/// Freie Funktion zu [`CubicCoefficients::evaluate`].
pub fn evaluate(coeffs: &CubicCoefficients, t: f32) -> Vec2 {
    coeffs.evaluate(t)
}

/// Tastet ein Segment mit `steps + 1` gleichmäßig in t verteilten Punkten ab.
///
/// Der Iterator ist klonbar und damit beliebig oft neu startbar.
/// `steps == 0` liefert nur `p0`.
pub fn sample_curve(
    p0: Vec2,
    p1: Vec2,
    g0: Vec2,
    g1: Vec2,
    steps: usize,
) -> impl Iterator<Item = Vec2> + Clone {
    let coeffs = CubicCoefficients::derive(p0, p1, g0, g1);
    (0..=steps).map(move |i| {
        let t = if steps == 0 {
            0.0
        } else {
            i as f32 / steps as f32
        };
        coeffs.evaluate(t)
    })
}

/// Ein kubisches Segment zwischen zwei aufeinanderfolgenden Ankerpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start-Anker
    pub p0: Vec2,
    /// End-Anker
    pub p1: Vec2,
    /// Vorwärts-Tangentenpunkt des Start-Ankers
    pub g0: Vec2,
    /// Rückwärts-Tangentenpunkt des End-Ankers
    pub g1: Vec2,
}

impl Segment {
    pub fn coefficients(&self) -> CubicCoefficients {
        CubicCoefficients::derive(self.p0, self.p1, self.g0, self.g1)
    }

    /// Polylinie des Segments (`steps + 1` Punkte).
    pub fn sample(&self, steps: usize) -> impl Iterator<Item = Vec2> + Clone {
        sample_curve(self.p0, self.p1, self.g0, self.g1, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn test_endpoints_interpolated() {
        let p0 = Vec2::new(12.0, -4.0);
        let p1 = Vec2::new(310.0, 145.0);
        let g0 = Vec2::new(80.0, 200.0);
        let g1 = Vec2::new(-40.0, 33.0);

        let coeffs = derive_coefficients(p0, p1, g0, g1);
        assert_eq!(evaluate(&coeffs, 0.0), p0);
        assert_vec_eq(evaluate(&coeffs, 1.0), p1);
    }

    #[test]
    fn test_coefficients_match_formula() {
        let coeffs = CubicCoefficients::derive(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 2.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(5.5, 1.5),
        );
        assert_relative_eq!(coeffs.x[0], 0.0);
        assert_relative_eq!(coeffs.x[1], 1.5);
        assert_relative_eq!(coeffs.x[2], 13.5);
        assert_relative_eq!(coeffs.x[3], -10.0);
        assert_relative_eq!(coeffs.y[0], 0.0);
        assert_relative_eq!(coeffs.y[1], 1.5);
        assert_relative_eq!(coeffs.y[2], 1.5);
        assert_relative_eq!(coeffs.y[3], -1.0);
    }

    #[test]
    fn test_matches_bernstein_form() {
        let (p0, g0, g1, p1) = (
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        let coeffs = CubicCoefficients::derive(p0, p1, g0, g1);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p0
                + 3.0 * inv * inv * t * g0
                + 3.0 * inv * t * t * g1
                + t * t * t * p1;
            assert_vec_eq(coeffs.evaluate(t), expected);
        }
    }

    #[test]
    fn test_degenerate_segment_stays_on_point() {
        let p = Vec2::new(7.0, 7.0);
        let points: Vec<Vec2> = sample_curve(p, p, p, p, 8).collect();
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|&q| (q - p).length() < 1e-4));
    }

    #[test]
    fn test_evaluate_outside_unit_interval() {
        // Gerade mit Dritteln als Tangentenpunkte → linear in t
        let coeffs = CubicCoefficients::derive(
            Vec2::ZERO,
            Vec2::new(3.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        );
        assert_vec_eq(coeffs.evaluate(-1.0), Vec2::new(-3.0, 0.0));
        assert_vec_eq(coeffs.evaluate(2.0), Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_sample_curve_count_and_order() {
        let p0 = Vec2::ZERO;
        let p1 = Vec2::new(100.0, 0.0);
        let samples: Vec<Vec2> =
            sample_curve(p0, p1, Vec2::new(33.0, 0.0), Vec2::new(66.0, 0.0), 100).collect();

        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], p0);
        assert_vec_eq(samples[100], p1);
        assert!(samples.windows(2).all(|w| w[1].x >= w[0].x));
    }

    #[test]
    fn test_sample_curve_zero_steps() {
        let p0 = Vec2::new(4.0, 2.0);
        let samples: Vec<Vec2> =
            sample_curve(p0, Vec2::ONE, Vec2::ZERO, Vec2::ZERO, 0).collect();
        assert_eq!(samples, vec![p0]);
    }

    #[test]
    fn test_sample_curve_restartable() {
        let iter = sample_curve(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            16,
        );
        let first: Vec<Vec2> = iter.clone().collect();
        let second: Vec<Vec2> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_polynomial() {
        let coeffs = CubicCoefficients {
            x: [1.0, 2.0, 3.0, 4.0],
            y: [5.0, 6.0, 7.0, 8.0],
        };
        assert_eq!(
            coeffs.to_string(),
            "x(t) = 1 + 2t + 3t^2 + 4t^3\ny(t) = 5 + 6t + 7t^2 + 8t^3"
        );
    }
}
