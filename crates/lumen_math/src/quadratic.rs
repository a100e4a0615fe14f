//! Real roots of `a*x^2 + b*x + c = 0`.

/// Solve a quadratic equation in double precision.
///
/// Returns `Some((x1, x2))` with `x1 >= x2` when a real solution exists:
///
/// - `a == 0, b != 0`: the linear root, returned twice
/// - discriminant `== 0`: the double root `-b / 2a`, returned twice
/// - discriminant `> 0`: `x1 = (-b + sqrt(d)) / 2a`, `x2 = (-b - sqrt(d)) / 2a`
///
/// Returns `None` when `a == 0 && b == 0` or when the discriminant is negative.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        if b == 0.0 {
            return None;
        }
        let root = -c / b;
        return Some((root, root));
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        None
    } else if discriminant == 0.0 {
        let root = -b / (2.0 * a);
        Some((root, root))
    } else {
        let sqrt_d = discriminant.sqrt();
        let x1 = (-b + sqrt_d) / (2.0 * a);
        let x2 = (-b - sqrt_d) / (2.0 * a);
        // a < 0 flips the order of the two expressions
        if x1 >= x2 {
            Some((x1, x2))
        } else {
            Some((x2, x1))
        }
    }
}
