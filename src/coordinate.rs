#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bit_vec::GeoBits,
    constants::{LATITUDE_RANGE, LONGITUDE_RANGE},
    error::Error,
    geohash::geohash,
    precision::Precision,
};

/// 緯度経度で表される地理座標
///
/// 緯度は `[-90, 90]`、経度は `[-180, 180]` の範囲に収まることが保証されます。
///
/// ```
/// # use geohash_bits::Coordinate;
/// let tokyo = Coordinate::new(35.681, 139.767).unwrap();
/// assert_eq!(tokyo.geohash(4).unwrap().to_string(), "1101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// 緯度経度から [`Coordinate`] を構築します。
    ///
    /// # バリデーション
    /// - 緯度が範囲外（NaN を含む）なら [`Error::LatitudeOutOfRange`]
    /// - 経度が範囲外（NaN を含む）なら [`Error::LongitudeOutOfRange`]
    pub fn new(latitude: f64, longitude: f64) -> Result<Coordinate, Error> {
        if !LATITUDE_RANGE.contains(latitude) {
            tracing::debug!(latitude, "rejected latitude");
            return Err(Error::LatitudeOutOfRange { latitude });
        }
        if !LONGITUDE_RANGE.contains(longitude) {
            tracing::debug!(longitude, "rejected longitude");
            return Err(Error::LongitudeOutOfRange { longitude });
        }
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// この座標のジオハッシュを `precision` ビットで求めます。
    pub fn geohash<P>(&self, precision: P) -> Result<GeoBits, Error>
    where
        P: TryInto<Precision>,
        P::Error: Into<Error>,
    {
        geohash(self.latitude, self.longitude, precision)
    }

    /// ランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Coordinate {
            latitude: rng.random_range(LATITUDE_RANGE.min()..=LATITUDE_RANGE.max()),
            longitude: rng.random_range(LONGITUDE_RANGE.min()..=LONGITUDE_RANGE.max()),
        }
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = Error;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}
