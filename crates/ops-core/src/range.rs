//! Inclusive integer ranges used as perturbation bounds.

use std::fmt;

use crate::{OpsError, OpsResult, RangeSource};

/// An inclusive `[min, max]` integer range with `min <= max`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct DeltaRange {
    min: i64,
    max: i64,
}

impl DeltaRange {
    /// Validate and build a range.
    pub fn new(min: i64, max: i64) -> OpsResult<Self> {
        if min > max {
            return Err(OpsError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build a range from compile-time constants.
    ///
    /// # Panics
    /// Panics if `min > max`.  In a `const` context this is a compile error.
    pub const fn fixed(min: i64, max: i64) -> Self {
        assert!(min <= max, "DeltaRange::fixed requires min <= max");
        Self { min, max }
    }

    #[inline]
    pub fn min(self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(self) -> i64 {
        self.max
    }

    #[inline]
    pub fn contains(self, v: i64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Draw one value uniformly from the range.
    #[inline]
    pub fn draw<R: RangeSource + ?Sized>(self, rng: &mut R) -> i64 {
        rng.int_in_range(self.min, self.max)
    }
}

impl TryFrom<(i64, i64)> for DeltaRange {
    type Error = OpsError;

    fn try_from((min, max): (i64, i64)) -> Result<Self, Self::Error> {
        DeltaRange::new(min, max)
    }
}

impl From<DeltaRange> for (i64, i64) {
    fn from(r: DeltaRange) -> Self {
        (r.min, r.max)
    }
}

impl fmt::Display for DeltaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
