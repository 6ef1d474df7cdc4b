use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// An absolute or relative instant with sub-second resolution.
///
/// Stored as a whole-second count plus a fractional-second remainder.
/// The raw fields are never normalized in place; every accessor reduces
/// the fractional part to `[0, 1)` and carries whole-number overflow
/// into the second count, so `full_secs + frac_secs` is preserved
/// exactly across construction and arithmetic.
///
/// For negative fractional inputs the reduced remainder follows the
/// sign of the input (like `fmod`), so it may be negative. Callers
/// constructing from negative fractions get that behavior as-is.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimeSpec {
    full_secs: i64,
    frac_secs: f64,
}

impl TimeSpec {
    /// Time from a real-valued seconds count; the whole part is zero
    /// and the fractional field holds the full value.
    pub fn from_secs(secs: f64) -> Self {
        Self {
            full_secs: 0,
            frac_secs: secs,
        }
    }

    /// Time from an explicit whole/fractional pair.
    pub fn new(full_secs: i64, frac_secs: f64) -> Self {
        Self {
            full_secs,
            frac_secs,
        }
    }

    /// Time from a whole-second count plus ticks at the given rate.
    pub fn from_ticks(full_secs: i64, tick_count: i64, tick_rate: f64) -> Self {
        Self {
            full_secs,
            frac_secs: tick_count as f64 / tick_rate,
        }
    }

    /// Fractional part reduced to `[0, 1)` (sign follows the stored
    /// fraction, so negative inputs yield a negative remainder).
    pub fn get_frac_secs(&self) -> f64 {
        self.frac_secs % 1.0
    }

    /// Whole seconds, with any whole-number overflow carried out of the
    /// fractional field (truncated toward zero).
    pub fn get_full_secs(&self) -> i64 {
        self.full_secs + self.frac_secs.trunc() as i64
    }

    /// The full value as a single float. Loses precision for large
    /// whole-second counts.
    pub fn get_real_secs(&self) -> f64 {
        self.full_secs as f64 + self.frac_secs
    }

    /// The normalized fractional part converted to ticks at the given
    /// rate, rounded half away from zero.
    pub fn get_tick_count(&self, tick_rate: f64) -> i64 {
        (self.get_frac_secs() * tick_rate).round() as i64
    }
}

impl AddAssign for TimeSpec {
    fn add_assign(&mut self, rhs: Self) {
        // Combine the rhs's normalized parts; the result is reduced by
        // the accessors, not eagerly.
        self.full_secs += rhs.get_full_secs();
        self.frac_secs += rhs.get_frac_secs();
    }
}

impl SubAssign for TimeSpec {
    fn sub_assign(&mut self, rhs: Self) {
        self.full_secs -= rhs.get_full_secs();
        self.frac_secs -= rhs.get_frac_secs();
    }
}

impl Add for TimeSpec {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for TimeSpec {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl PartialEq for TimeSpec {
    fn eq(&self, other: &Self) -> bool {
        // Exact float comparison on the normalized parts, no epsilon.
        self.get_full_secs() == other.get_full_secs()
            && self.get_frac_secs() == other.get_frac_secs()
    }
}

impl PartialOrd for TimeSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.get_full_secs().cmp(&other.get_full_secs()) {
            Ordering::Equal => self.get_frac_secs().partial_cmp(&other.get_frac_secs()),
            ord => Some(ord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frac_carry_into_full() {
        assert_eq!(TimeSpec::new(5, 0.999999999).get_full_secs(), 5);
        assert_eq!(TimeSpec::new(5, 1.5).get_full_secs(), 6);
        assert!((TimeSpec::new(5, 1.5).get_frac_secs() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_real_secs_identity() {
        for secs in [0.0, 0.25, 1.75, 1234.5] {
            assert!((TimeSpec::from_secs(secs).get_real_secs() - secs).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_frac_keeps_sign() {
        // Known boundary behavior: the remainder follows the dividend,
        // so a negative fraction normalizes to a negative value.
        let t = TimeSpec::from_secs(-0.5);
        assert_eq!(t.get_full_secs(), 0);
        assert!((t.get_frac_secs() - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_equality_is_on_normalized_parts() {
        assert_eq!(TimeSpec::new(1, 0.5), TimeSpec::new(0, 1.5));
        assert_ne!(TimeSpec::new(1, 0.5), TimeSpec::new(1, 0.25));
    }

    #[test]
    fn test_add_assign_uses_normalized_operand() {
        let mut a = TimeSpec::new(1, 0.75);
        a += TimeSpec::new(0, 1.5); // normalizes to (1, 0.5)
        assert_eq!(a.get_full_secs(), 3); // 1 + 1, then 0.75 + 0.5 carries
        assert!((a.get_frac_secs() - 0.25).abs() < 1e-12);
        assert!((a.get_real_secs() - 3.25).abs() < 1e-12);
    }
}
