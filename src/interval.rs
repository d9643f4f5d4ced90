use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 1次元の値が取り得る範囲を表す型です。
///
/// 端点は与えられた順序のまま保持します。`low > high` で渡された場合も並び替えは行わず、
/// 範囲判定や正規化では [`Interval::min`] / [`Interval::max`] を明示的に用います。
///
/// ```
/// # use geohash_bits::Interval;
/// let interval = Interval::new(180.0, -180.0).unwrap();
/// assert_eq!(interval.low(), 180.0);
/// assert_eq!(interval.min(), -180.0);
/// assert_eq!(interval.span(), 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Interval {
    low: f64,
    high: f64,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl Interval {
    /// 2つの端点から [`Interval`] を構築します。
    ///
    /// # バリデーション
    /// - どちらかの端点が NaN または無限大の場合、[`Error::NonFiniteBound`] を返します。
    /// - 端点間の幅が `f64` で表せない場合、[`Error::SpanOverflow`] を返します。
    pub fn new(low: f64, high: f64) -> Result<Interval, Error> {
        if !low.is_finite() || !high.is_finite() {
            tracing::debug!(low, high, "rejected non-finite interval bound");
            return Err(Error::NonFiniteBound { low, high });
        }
        if !(high - low).is_finite() {
            tracing::debug!(low, high, "rejected interval with overflowing span");
            return Err(Error::SpanOverflow { low, high });
        }
        Ok(Interval { low, high })
    }

    /// 検証済みの定数のためのコンストラクタ
    pub(crate) const fn from_bounds_unchecked(low: f64, high: f64) -> Interval {
        Interval { low, high }
    }

    /// 構築時に渡された1つ目の端点を返します。
    pub fn low(&self) -> f64 {
        self.low
    }

    /// 構築時に渡された2つ目の端点を返します。
    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn min(&self) -> f64 {
        self.low.min(self.high)
    }

    pub fn max(&self) -> f64 {
        self.low.max(self.high)
    }

    /// 範囲の幅（常に非負）
    pub fn span(&self) -> f64 {
        (self.high - self.low).abs()
    }

    /// `value` が閉区間 `[min, max]` に含まれるかを返します。NaN は常に含まれません。
    pub fn contains(&self, value: f64) -> bool {
        self.min() <= value && value <= self.max()
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = Error;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        Interval::new(bounds[0], bounds[1])
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = Error;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Interval::new(low, high)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}

impl TryFrom<&[f64]> for Interval {
    type Error = Error;

    /// 端点の数が2つでない場合は [`Error::MalformedInterval`] を返します。
    fn try_from(bounds: &[f64]) -> Result<Self, Self::Error> {
        match bounds {
            [low, high] => Interval::new(*low, *high),
            _ => {
                tracing::debug!(len = bounds.len(), "rejected malformed interval");
                Err(Error::MalformedInterval { len: bounds.len() })
            }
        }
    }
}

impl TryFrom<&Vec<f64>> for Interval {
    type Error = Error;

    fn try_from(bounds: &Vec<f64>) -> Result<Self, Self::Error> {
        Interval::try_from(bounds.as_slice())
    }
}
