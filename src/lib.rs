/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 緯度・経度の範囲定数。
mod constants;

/// 1次元の値の範囲。
mod interval;

/// 要求するビット数。
mod precision;

/// ジオハッシュのビット列。
mod bit_vec;

/// 二分割によるエンコードと2軸のインターリーブ。
mod geohash;

/// 地理座標。
mod coordinate;

pub use bit_vec::GeoBits;
pub use bit_vec::format::to_hash_string;
pub use constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
pub use coordinate::Coordinate;
pub use error::Error;
pub use geohash::{encode_1d, encode_2d, geohash, geohash_string, interleave, split_precision};
pub use interval::Interval;
pub use precision::Precision;
