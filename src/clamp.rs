use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a range has `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range: lo ({lo}) is greater than hi ({hi})")]
pub struct InvalidRangeError {
    pub lo: i64,
    pub hi: i64,
}

/// Restricts `value` to the closed interval `[lo, hi]`.
///
/// The caller is responsible for `lo <= hi`. With an inverted range the two
/// comparisons still run in order (`value < lo` first, then `value > hi`), so
/// `clamp(5, 10, 0)` is `10` while `clamp(7, 10, 5)` falls through to `7`.
/// Use [`try_clamp`] or [`BoundedRange`] when the range is not trusted.
#[inline]
pub const fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Like [`clamp`], but rejects an inverted range instead of applying it.
pub fn try_clamp(value: i64, lo: i64, hi: i64) -> Result<i64, InvalidRangeError> {
    let range = BoundedRange::new(lo, hi)?;
    Ok(range.clamp(value))
}

/// How an inverted range is treated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Reject lo > hi
    #[default]
    Strict,
    /// Apply the raw comparison order
    Lenient,
}

impl RangePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RangePolicy::Strict => "strict",
            RangePolicy::Lenient => "lenient",
        }
    }
}

/// Clamps under the given policy. `Lenient` never fails.
pub fn clamp_with(
    policy: RangePolicy,
    value: i64,
    lo: i64,
    hi: i64,
) -> Result<i64, InvalidRangeError> {
    match policy {
        RangePolicy::Strict => try_clamp(value, lo, hi),
        RangePolicy::Lenient => Ok(clamp(value, lo, hi)),
    }
}

/// Inclusive integer range with `lo <= hi` guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct BoundedRange {
    lo: i64,
    hi: i64,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawRange {
    lo: i64,
    hi: i64,
}

impl Default for RawRange {
    fn default() -> Self {
        let BoundedRange { lo, hi } = BoundedRange::default();
        Self { lo, hi }
    }
}

impl TryFrom<RawRange> for BoundedRange {
    type Error = InvalidRangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.lo, raw.hi)
    }
}

impl BoundedRange {
    pub const fn new(lo: i64, hi: i64) -> Result<Self, InvalidRangeError> {
        if lo > hi {
            return Err(InvalidRangeError { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    #[inline]
    pub const fn lo(&self) -> i64 {
        self.lo
    }

    #[inline]
    pub const fn hi(&self) -> i64 {
        self.hi
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    #[inline]
    pub const fn clamp(&self, value: i64) -> i64 {
        clamp(value, self.lo, self.hi)
    }
}

impl Default for BoundedRange {
    fn default() -> Self {
        Self { lo: 0, hi: 10 }
    }
}
