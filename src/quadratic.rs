//! Real roots of `a·t² + b·t + c = 0`.

/// Up to two real roots stored in a fixed buffer. The order is not guaranteed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Roots {
    values: [f64; 2],
    count: usize,
}

impl Roots {
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.count]
    }

    /// Returns the same roots in ascending order.
    pub fn sorted(mut self) -> Self {
        if self.count == 2 && self.values[0] > self.values[1] {
            self.values.swap(0, 1);
        }
        self
    }
}

/// A vanishing leading coefficient reports no roots, as do NaN coefficients. Every caller
/// treats that as a miss.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    let mut roots = Roots::default();

    if a == 0.0 {
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if !(discriminant >= 0.0) {
        return roots;
    }

    let denominator = 2.0 * a;
    if discriminant == 0.0 {
        roots.values[0] = -b / denominator;
        roots.count = 1;
    } else {
        let sqrt = discriminant.sqrt();
        roots.values = [(-b + sqrt) / denominator, (-b - sqrt) / denominator];
        roots.count = 2;
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_roots() {
        // (t - 1)(t - 3)
        let roots = solve_quadratic(1.0, -4.0, 3.0).sorted();
        assert_eq!(&[1.0, 3.0], roots.as_slice());
    }

    #[test]
    fn tangent_has_single_root() {
        // (t - 2)²
        let roots = solve_quadratic(1.0, -4.0, 4.0);
        assert_eq!(&[2.0], roots.as_slice());
    }

    #[test]
    fn negative_discriminant_has_no_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn degenerate_leading_coefficient_has_no_roots() {
        assert!(solve_quadratic(0.0, 2.0, 1.0).is_empty());
    }

    #[test]
    fn nan_coefficients_have_no_roots() {
        assert!(solve_quadratic(f64::NAN, 0.0, -1.0).is_empty());
        assert!(solve_quadratic(1.0, f64::NAN, -1.0).is_empty());
    }
}
