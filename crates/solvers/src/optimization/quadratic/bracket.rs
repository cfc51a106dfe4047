use super::Point;

/// Where an interpolated candidate falls relative to the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// Below the lower bound.
    BelowLower,

    /// In `[lower, mid)`.
    LowerHalf,

    /// Exactly at the midpoint.
    AtMid,

    /// In `(mid, upper)`.
    UpperHalf,

    /// At or above the upper bound.
    AboveUpper,
}

/// The current search bracket: three points with `lower.x < mid.x < upper.x`
/// and their costs.
///
/// All interpolation arithmetic lives here. A bracket is an immutable view
/// of the solver state at one iteration; updates happen in the state that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower bracket point.
    pub lower: Point,

    /// Midpoint, the current best estimate.
    pub mid: Point,

    /// Upper bracket point.
    pub upper: Point,
}

impl Bracket {
    pub(super) fn new(lower: Point, mid: Point, upper: Point) -> Self {
        Self { lower, mid, upper }
    }

    /// Returns the bracket width `upper.x - lower.x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper.x - self.lower.x
    }

    /// Returns the width of the narrower of the two sub-intervals.
    pub(super) fn narrow_side(&self) -> f64 {
        f64::min(self.mid.x - self.lower.x, self.upper.x - self.mid.x)
    }

    /// Cost the lower→upper chord predicts at the midpoint.
    fn chord_at_mid(&self) -> f64 {
        let run = self.upper.x - self.lower.x;
        self.lower.cost + (self.upper.cost - self.lower.cost) * (self.mid.x - self.lower.x) / run
    }

    /// True when the midpoint cost lies above the chord between the bracket
    /// ends, a shape the convexity assumption cannot handle.
    pub(super) fn violates_convexity(&self) -> bool {
        self.mid.cost > self.chord_at_mid()
    }

    /// Relative spread of the endpoint costs, `|fu − fl| / |½(fu + fl)|`.
    ///
    /// Used to rescue an apparent non-convexity when the cost is nearly
    /// flat across the bracket.
    pub(super) fn relative_spread(&self) -> f64 {
        let spread = self.upper.cost - self.lower.cost;
        (spread / (0.5 * (self.upper.cost + self.lower.cost))).abs()
    }

    /// Next candidate from inverse quadratic interpolation.
    ///
    /// Fits a quadratic through the three bracket costs via the one-sided
    /// slopes and returns the x where its derivative vanishes. Non-finite
    /// when the three points are colinear (equal slopes) or any cost is
    /// non-finite.
    pub(super) fn candidate(&self) -> f64 {
        let slope_lower = (self.mid.cost - self.lower.cost) / (self.mid.x - self.lower.x);
        let slope_upper = (self.upper.cost - self.mid.cost) / (self.upper.x - self.mid.x);

        0.5 * (self.lower.x + self.mid.x)
            - slope_lower * self.width() / (2.0 * (slope_upper - slope_lower))
    }

    /// Classifies where `x` falls relative to the bracket.
    pub(super) fn placement(&self, x: f64) -> Placement {
        if x < self.lower.x {
            Placement::BelowLower
        } else if x < self.mid.x {
            Placement::LowerHalf
        } else if x == self.mid.x {
            Placement::AtMid
        } else if x < self.upper.x {
            Placement::UpperHalf
        } else {
            Placement::AboveUpper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Bracket sampled from f(x) = (x − 2)² at 0, 1, 5.
    fn parabola_bracket() -> Bracket {
        Bracket::new(
            Point::new(0.0, 4.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 9.0),
        )
    }

    #[test]
    fn candidate_is_exact_for_a_quadratic_cost() {
        // Slopes: (1−4)/1 = −3 and (9−1)/4 = 2, so the interpolated
        // candidate lands exactly on the parabola's vertex at x = 2.
        let bracket = parabola_bracket();
        assert_relative_eq!(bracket.candidate(), 2.0);
    }

    #[test]
    fn candidate_is_non_finite_for_colinear_points() {
        let bracket = Bracket::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        );
        assert!(!bracket.candidate().is_finite());
    }

    #[test]
    fn convexity_holds_for_a_parabola() {
        assert!(!parabola_bracket().violates_convexity());
    }

    #[test]
    fn convexity_violated_when_mid_above_chord() {
        // f(x) = −x² sampled at −5, 0, 5: the chord predicts −25 at the
        // midpoint, but the cost there is 0.
        let bracket = Bracket::new(
            Point::new(-5.0, -25.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, -25.0),
        );
        assert!(bracket.violates_convexity());
    }

    #[test]
    fn relative_spread_is_zero_for_symmetric_endpoints() {
        let bracket = Bracket::new(
            Point::new(-5.0, -25.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, -25.0),
        );
        assert_relative_eq!(bracket.relative_spread(), 0.0);
    }

    #[test]
    fn width_and_narrow_side() {
        let bracket = parabola_bracket();
        assert_relative_eq!(bracket.width(), 5.0);
        assert_relative_eq!(bracket.narrow_side(), 1.0);
    }

    #[test]
    fn placement_covers_all_regions() {
        let bracket = parabola_bracket();

        assert_eq!(bracket.placement(-0.5), Placement::BelowLower);
        assert_eq!(bracket.placement(0.0), Placement::LowerHalf);
        assert_eq!(bracket.placement(0.5), Placement::LowerHalf);
        assert_eq!(bracket.placement(1.0), Placement::AtMid);
        assert_eq!(bracket.placement(3.0), Placement::UpperHalf);
        assert_eq!(bracket.placement(5.0), Placement::AboveUpper);
        assert_eq!(bracket.placement(6.0), Placement::AboveUpper);
    }
}
