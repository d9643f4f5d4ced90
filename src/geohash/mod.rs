pub mod encode_1d;
pub mod encode_2d;

#[cfg(test)]
mod tests;

use crate::{
    bit_vec::GeoBits,
    constants::{LATITUDE_RANGE, LONGITUDE_RANGE},
    error::Error,
    interval::Interval,
    precision::Precision,
};

pub use encode_1d::encode_1d;
pub use encode_2d::{encode_2d, interleave, split_precision};

/// 緯度・経度から地理ジオハッシュを求めます。
///
/// 緯度を軸1（`[-90, 90]`）、経度を軸2（`[-180, 180]`）として [`encode_2d`] に委譲します。
///
/// ```
/// # use geohash_bits::geohash;
/// assert_eq!(geohash(90.0, -158.5, 10).unwrap().to_string(), "1010101011");
/// ```
pub fn geohash<P>(latitude: f64, longitude: f64, precision: P) -> Result<GeoBits, Error>
where
    P: TryInto<Precision>,
    P::Error: Into<Error>,
{
    encode_2d(latitude, LATITUDE_RANGE, longitude, LONGITUDE_RANGE, precision)
}

/// [`encode_1d`] の結果を `'1'` / `'0'` の文字列で返す
pub fn geohash_string<I, P>(value: f64, interval: I, precision: P) -> Result<String, Error>
where
    I: TryInto<Interval>,
    I::Error: Into<Error>,
    P: TryInto<Precision>,
    P::Error: Into<Error>,
{
    encode_1d(value, interval, precision).map(|bits| bits.to_bit_string())
}
