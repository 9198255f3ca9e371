//! Closed-form real root finding for cubic polynomials
//!
//! The Bézier sweep test reduces to one cubic per curve, so a direct
//! Cardano-style solver is all the root finding the crate needs. Only real
//! roots are reported; a conjugate complex pair simply contributes nothing
//! to the candidate set.

use super::line::is_zero;

const COS120: f64 = -0.5;
const SIN120: f64 = 0.866_025_403_784_438_6;

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`, in no particular order.
///
/// Degrades gracefully when leading coefficients vanish: quadratic, linear,
/// or no roots at all for a constant. A (near-)zero constant term is peeled
/// off as an exact `x = 0` root before deflating to a quadratic, which
/// avoids catastrophic cancellation around the origin.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    let mut roots = Vec::with_capacity(3);
    let (mut a, mut b, mut c, mut d) = (a, b, c, d);

    if is_zero(d) {
        roots.push(0.0);
        d = c;
        c = b;
        b = a;
        a = 0.0;
    }

    if is_zero(a) {
        if is_zero(b) {
            // linear
            if !is_zero(c) {
                roots.push(-d / c);
            }
        } else {
            // quadratic
            let discriminant = c * c - 4.0 * b * d;
            if discriminant >= 0.0 {
                let inv2b = 1.0 / (2.0 * b);
                let y = discriminant.sqrt();
                roots.push((-c + y) * inv2b);
                roots.push((-c - y) * inv2b);
            }
        }
        return roots;
    }

    // depressed cubic t^3 + p*t + q via x = t - b/(3a)
    let inva = 1.0 / a;
    let invaa = inva * inva;
    let bb = b * b;
    let bover3a = b * (1.0 / 3.0) * inva;
    let p = (3.0 * a * c - bb) * (1.0 / 3.0) * invaa;
    let halfq = (2.0 * bb * b - 9.0 * a * b * c + 27.0 * a * a * d) * (0.5 / 27.0) * invaa * inva;
    let yy = p * p * p / 27.0 + halfq * halfq;

    if !is_zero(yy) && yy > 0.0 {
        // positive discriminant: one real root
        let y = yy.sqrt();
        let uuu = -halfq + y;
        let vvv = -halfq - y;
        let www = if uuu.abs() > vvv.abs() { uuu } else { vvv };
        let w = www.cbrt();
        roots.push(w - p / (3.0 * w) - bover3a);
    } else if !is_zero(yy) && yy < 0.0 {
        // negative discriminant: three real roots via the trigonometric form
        let x = -halfq;
        let y = (-yy).sqrt();
        let (theta, r) = if x.abs() > 1e-15 {
            let theta = if x > 0.0 {
                (y / x).atan()
            } else {
                (y / x).atan() + std::f64::consts::PI
            };
            (theta, (x * x - yy).sqrt())
        } else {
            (std::f64::consts::FRAC_PI_2, y)
        };
        let theta = theta / 3.0;
        let r = r.cbrt();
        let ux = theta.cos() * r;
        let uyi = theta.sin() * r;
        roots.push(ux + ux - bover3a);
        roots.push(2.0 * (ux * COS120 - uyi * SIN120) - bover3a);
        roots.push(2.0 * (ux * COS120 + uyi * SIN120) - bover3a);
    } else {
        // zero discriminant: a repeated root
        let w = (-halfq).cbrt();
        roots.push(w + w - bover3a);
        roots.push(2.0 * w * COS120 - bover3a);
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted(mut roots: Vec<f64>) -> Vec<f64> {
        roots.sort_by(f64::total_cmp);
        roots
    }

    #[test]
    fn test_three_distinct_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = sorted(solve_cubic(1.0, -6.0, 11.0, -6.0));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_real_root() {
        // x^3 + x - 2 = (x - 1)(x^2 + x + 2), complex pair discarded
        let roots = solve_cubic(1.0, 0.0, 1.0, -2.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_constant_term_deflates() {
        // x(x - 1)(x + 2) = x^3 + x^2 - 2x
        let roots = sorted(solve_cubic(1.0, 1.0, -2.0, 0.0));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 0.0);
        assert_relative_eq!(roots[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_degradation() {
        // x^2 - 5x + 6
        let roots = sorted(solve_cubic(0.0, 1.0, -5.0, 6.0));
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-9);

        // negative discriminant: nothing
        assert!(solve_cubic(0.0, 1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_linear_and_constant() {
        let roots = solve_cubic(0.0, 0.0, 2.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 0.5);

        // constant non-zero polynomial has no roots
        assert!(solve_cubic(0.0, 0.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn test_repeated_root() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2
        let roots = sorted(solve_cubic(1.0, 0.0, -3.0, 2.0));
        assert!(roots.len() >= 2);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-9);
        assert_relative_eq!(*roots.last().unwrap(), 1.0, epsilon = 1e-6);
    }
}
