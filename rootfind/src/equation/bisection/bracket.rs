/// Current search interval and the residual at its `a` endpoint.
///
/// Endpoints keep the caller's orientation, so `a > b` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
    fa: f64,
}

impl Bracket {
    /// Creates a bracket from its endpoints and the residual at `a`.
    pub(super) fn new(a: f64, b: f64, fa: f64) -> Self {
        Self { a, b, fa }
    }

    /// Returns the bracket endpoints as `[a, b]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Returns the absolute bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Narrows the bracket to the half that keeps the sign change.
    ///
    /// A non-negative product `fc * fa` moves `a` to `c`, including the
    /// case where the product is exactly zero or underflows to zero.
    pub(super) fn shrink(&mut self, c: f64, fc: f64) {
        if fc * self.fa >= 0.0 {
            self.a = c;
            self.fa = fc;
        } else {
            self.b = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn midpoint_and_width_ignore_orientation() {
        let bracket = Bracket::new(4.0, 0.0, 1.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
        assert_relative_eq!(bracket.width(), 4.0);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = Bracket::new(0.0, 2.0, -1.0);

        bracket.shrink(1.0, -0.5);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
    }

    #[test]
    fn shrink_moves_a_on_zero_product() {
        let mut bracket = Bracket::new(0.0, 2.0, -1.0);
        bracket.shrink(1.0, 0.0);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        // Opposite signs whose product underflows still count as zero.
        let mut bracket = Bracket::new(0.0, 2.0, -1e-200);
        bracket.shrink(1.0, 1e-200);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
    }
}
