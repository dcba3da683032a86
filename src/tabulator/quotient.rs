use crate::model::SeatCount;
use serde::Serialize;

/// Vote "cost" of one seat: total valid votes divided by (council seats + 1).
///
/// A degenerate quotient (no votes, no seats, or a value that is not a finite
/// positive number) is reported with `value == 0.0` rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElectoralQuotient {
    total_votes: u64,
    divisor: u64,
    value: f64,
}

impl ElectoralQuotient {
    pub fn compute(total_votes: u64, seats: SeatCount) -> ElectoralQuotient {
        let divisor = u64::from(seats.get()) + 1;
        let raw = total_votes as f64 / divisor as f64;

        let value = if total_votes == 0 || seats.is_zero() || !raw.is_finite() || raw <= 0.0 {
            0.0
        } else {
            raw
        };

        ElectoralQuotient {
            total_votes,
            divisor,
            value,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.total_votes
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// Full-precision value used by the allocator.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_degenerate(&self) -> bool {
        self.value <= 0.0
    }

    /// Value rounded for display only.
    pub fn rounded(&self, decimals: u32) -> f64 {
        let scale = 10f64.powi(decimals.min(15) as i32);
        (self.value * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_seats_plus_mayor() {
        let q = ElectoralQuotient::compute(1000, SeatCount::new(6));
        assert_eq!(q.divisor(), 7);
        assert!((q.value() - 142.857_142_857).abs() < 1e-6);
        assert!(!q.is_degenerate());
    }

    #[test]
    fn zero_votes_is_degenerate() {
        let q = ElectoralQuotient::compute(0, SeatCount::new(6));
        assert!(q.is_degenerate());
        assert_eq!(q.value(), 0.0);
    }

    #[test]
    fn zero_seats_is_degenerate() {
        let q = ElectoralQuotient::compute(500, SeatCount::new(0));
        assert!(q.is_degenerate());
    }

    #[test]
    fn rounding_is_display_only() {
        let q = ElectoralQuotient::compute(1000, SeatCount::new(6));
        assert_eq!(q.rounded(6), 142.857143);
        assert_eq!(q.rounded(2), 142.86);
        assert!(q.value() != q.rounded(6));
    }
}
