#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use thiserror::Error;

/// 不正な引数に対して返されるエラー。
///
/// どのバリアントも呼び出し側の入力が不正であることを表す。
/// エンコーダは値を丸めたり既定値で置き換えたりしない。
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("interval must consist of exactly 2 bounds (got {len})")]
    MalformedInterval { len: usize },

    #[error("interval bounds must be finite (got [{low}, {high}])")]
    NonFiniteBound { low: f64, high: f64 },

    #[error("interval [{low}, {high}] is too wide to be represented")]
    SpanOverflow { low: f64, high: f64 },

    #[error("precision '{precision}' must not be negative")]
    NegativePrecision { precision: i64 },

    #[error("precision '{precision}' exceeds the maximum of {max} bits")]
    PrecisionTooLarge { precision: u64, max: u32 },

    #[error("value '{value}' is out of range [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    #[error("invalid bit character '{ch}' at index {index} (expected '0' or '1')")]
    InvalidBitChar { ch: char, index: usize },

    #[error("latitude '{latitude}' is out of range (valid: -90..=90)")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("longitude '{longitude}' is out of range (valid: -180..=180)")]
    LongitudeOutOfRange { longitude: f64 },
}

// `Interval` や `Precision` をそのまま渡した場合の恒等変換用
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
