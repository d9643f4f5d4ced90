use crate::{bit_vec::GeoBits, error::Error, interval::Interval, precision::Precision};

use super::encode_1d::encode_1d;

/// 合計ビット数を (軸1, 軸2) に分配する。奇数のときは軸1が1ビット多い。
///
/// ```
/// # use geohash_bits::split_precision;
/// assert_eq!(split_precision(11), (6, 5));
/// assert_eq!(split_precision(10), (5, 5));
/// assert_eq!(split_precision(0), (0, 0));
/// ```
pub fn split_precision(precision: u32) -> (u32, u32) {
    let second = precision / 2;
    (precision - second, second)
}

/// 2つの値をそれぞれ1次元でエンコードし、軸1のビットを先頭にして交互に並べます。
///
/// 軸1は `ceil(precision / 2)` ビット、軸2は `floor(precision / 2)` ビットを使います。
/// どちらかの軸でエラーが起きた場合はそのまま返します。区間・精度の検証は
/// 軸に分ける前に一度だけ行うため、判定の優先順位は [`encode_1d`] と同じです。
///
/// ```
/// # use geohash_bits::{encode_2d, LATITUDE_RANGE, LONGITUDE_RANGE};
/// let hash = encode_2d(-90.0, LATITUDE_RANGE, 180.0, LONGITUDE_RANGE, 11).unwrap();
/// assert_eq!(hash.to_string(), "01010101010");
/// ```
pub fn encode_2d<I1, I2, P>(
    v1: f64,
    range1: I1,
    v2: f64,
    range2: I2,
    precision: P,
) -> Result<GeoBits, Error>
where
    I1: TryInto<Interval>,
    I1::Error: Into<Error>,
    I2: TryInto<Interval>,
    I2::Error: Into<Error>,
    P: TryInto<Precision>,
    P::Error: Into<Error>,
{
    let range1 = range1.try_into().map_err(Into::<Error>::into)?;
    let range2 = range2.try_into().map_err(Into::<Error>::into)?;
    let precision = precision.try_into().map_err(Into::<Error>::into)?;

    let (first_bits, second_bits) = split_precision(precision.bits());
    let first = encode_1d(v1, range1, first_bits)?;
    let second = encode_1d(v2, range2, second_bits)?;

    let hash = interleave(&first, &second);
    debug_assert_eq!(hash.len(), precision.bits() as usize);
    Ok(hash)
}

/// `first` と `second` を `first` の先頭ビットから交互に並べる。
///
/// 偶数番目に `first`、奇数番目に `second` のビットが入る。
/// 一方が尽きた後は残りをそのまま続ける。
pub fn interleave(first: &GeoBits, second: &GeoBits) -> GeoBits {
    let mut out = GeoBits::with_capacity(first.len() + second.len());
    let mut a = first.iter();
    let mut b = second.iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => {
                out.extend(x);
                out.extend(y);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sums_to_total() {
        for p in 0..64 {
            let (a, b) = split_precision(p);
            assert_eq!(a + b, p);
            assert_eq!(a, p.div_ceil(2));
            assert_eq!(b, p / 2);
        }
    }

    #[test]
    fn interleave_odd_tail_belongs_to_first() {
        let first: GeoBits = "111".parse().unwrap();
        let second: GeoBits = "00".parse().unwrap();
        assert_eq!(interleave(&first, &second).to_string(), "10101");
    }

    #[test]
    fn interleave_empty() {
        assert!(interleave(&GeoBits::new(), &GeoBits::new()).is_empty());
    }

    #[test]
    fn error_from_second_axis_propagates() {
        let err = encode_2d(0.0, [-90.0, 90.0], 200.0, [-180.0, 180.0], 10).unwrap_err();
        assert_eq!(
            err,
            Error::ValueOutOfRange {
                value: 200.0,
                min: -180.0,
                max: 180.0
            }
        );
    }

    #[test]
    fn one_bit_uses_only_first_axis() {
        // precision 1 では軸2は 0 ビット
        assert_eq!(
            encode_2d(45.0, [-90.0, 90.0], -180.0, [-180.0, 180.0], 1)
                .unwrap()
                .to_string(),
            "1"
        );
    }
}
