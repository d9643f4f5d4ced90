use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 要求されるビット数を表す型です。
///
/// 0 は有効な値で、空のビット列を意味します。
/// 符号付き整数から変換する場合、負の値は [`Error::NegativePrecision`] になります。
///
/// ```
/// # use geohash_bits::{Error, Precision};
/// assert_eq!(Precision::try_from(5).unwrap().bits(), 5);
/// assert_eq!(
///     Precision::try_from(-1),
///     Err(Error::NegativePrecision { precision: -1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precision(u32);

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Precision {
    /// 指定できる最大のビット数
    pub const MAX: Precision = Precision(u32::MAX);

    pub const fn new(bits: u32) -> Precision {
        Precision(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Precision {
    fn from(bits: u32) -> Self {
        Precision(bits)
    }
}

impl From<u8> for Precision {
    fn from(bits: u8) -> Self {
        Precision(bits as u32)
    }
}

impl From<u16> for Precision {
    fn from(bits: u16) -> Self {
        Precision(bits as u32)
    }
}

impl TryFrom<i64> for Precision {
    type Error = Error;

    fn try_from(precision: i64) -> Result<Self, Self::Error> {
        if precision < 0 {
            tracing::debug!(precision, "rejected negative precision");
            return Err(Error::NegativePrecision { precision });
        }
        Precision::try_from(precision as u64)
    }
}

impl TryFrom<i32> for Precision {
    type Error = Error;

    fn try_from(precision: i32) -> Result<Self, Self::Error> {
        Precision::try_from(precision as i64)
    }
}

impl TryFrom<usize> for Precision {
    type Error = Error;

    fn try_from(precision: usize) -> Result<Self, Self::Error> {
        Precision::try_from(precision as u64)
    }
}

impl TryFrom<u64> for Precision {
    type Error = Error;

    /// [`Precision::MAX`] を超える場合は [`Error::PrecisionTooLarge`] を返します。
    fn try_from(precision: u64) -> Result<Self, Self::Error> {
        match u32::try_from(precision) {
            Ok(bits) => Ok(Precision(bits)),
            Err(_) => {
                tracing::debug!(precision, "rejected too large precision");
                Err(Error::PrecisionTooLarge {
                    precision,
                    max: Precision::MAX.0,
                })
            }
        }
    }
}
