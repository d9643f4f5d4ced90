use crate::interval::Interval;

/// 緯度の有効範囲 `[-90, 90]`
///
/// ```
/// # use geohash_bits::{LATITUDE_RANGE, geohash_string};
/// assert_eq!(geohash_string(-90.0, LATITUDE_RANGE, 5).unwrap(), "00000");
/// ```
pub const LATITUDE_RANGE: Interval = Interval::from_bounds_unchecked(-90.0, 90.0);

/// 経度の有効範囲 `[-180, 180]`
///
/// ```
/// # use geohash_bits::{LONGITUDE_RANGE, geohash_string};
/// assert_eq!(geohash_string(180.0, LONGITUDE_RANGE, 5).unwrap(), "11111");
/// ```
pub const LONGITUDE_RANGE: Interval = Interval::from_bounds_unchecked(-180.0, 180.0);
