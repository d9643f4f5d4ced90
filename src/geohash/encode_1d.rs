use crate::{bit_vec::GeoBits, error::Error, interval::Interval, precision::Precision};

/// 1次元の値を二分割を繰り返してビット列に変換します。
///
/// 区間を `min` が 0 になるように平行移動した後、残りの幅を `precision` 回半分にします。
/// 各段で値が幅の半分以上なら `1`（上側）、未満なら `0`（下側）を出力します。
/// ちょうど中点にある値は常に上側に分類されます。
///
/// # バリデーション（この順で判定）
/// - 区間の端点が2つでない、または有限でない場合 [`Error::MalformedInterval`] / [`Error::NonFiniteBound`]
/// - 負の精度の場合 [`Error::NegativePrecision`]
/// - 値が `[min, max]` の外（NaN を含む）の場合 [`Error::ValueOutOfRange`]
///
/// ```
/// # use geohash_bits::{encode_1d, LONGITUDE_RANGE};
/// assert_eq!(encode_1d(90.0, LONGITUDE_RANGE, 5).unwrap().to_string(), "11000");
/// assert_eq!(encode_1d(-1.0, [-180.0, 180.0], 5).unwrap().to_string(), "01111");
/// assert!(encode_1d(0.0, [-180.0, 180.0], 0).unwrap().is_empty());
/// ```
pub fn encode_1d<I, P>(value: f64, interval: I, precision: P) -> Result<GeoBits, Error>
where
    I: TryInto<Interval>,
    I::Error: Into<Error>,
    P: TryInto<Precision>,
    P::Error: Into<Error>,
{
    let interval = interval.try_into().map_err(Into::<Error>::into)?;
    let precision = precision.try_into().map_err(Into::<Error>::into)?;

    if !interval.contains(value) {
        tracing::debug!(value, %interval, "rejected value outside interval");
        return Err(Error::ValueOutOfRange {
            value,
            min: interval.min(),
            max: interval.max(),
        });
    }

    let bits = bisect(value - interval.min(), interval.span(), precision.bits());
    tracing::trace!(value, %interval, %precision, hash = %bits, "encoded 1d geohash");
    Ok(bits)
}

/// 幅がこれを下回ったら値と幅を [`RESCALE_FACTOR`] 倍する（2^-512）
const RESCALE_BELOW: f64 = f64::from_bits(511 << 52);

/// 2^512。2 のべき乗なので拡大は誤差を生まない
const RESCALE_FACTOR: f64 = f64::from_bits(1535 << 52);

/// 正規化済みの値 `[0, span]` を `precision` 回二分割する
///
/// 幅が非正規化数の領域に入ると半分にした値が丸められ、境界値のビットが崩れる。
/// そこに届く前に値と幅を同じ 2 のべき乗で拡大し、各段の計算を誤差なしに保つ。
fn bisect(mut value: f64, mut span: f64, precision: u32) -> GeoBits {
    let mut bits = GeoBits::with_capacity(precision as usize);
    for _ in 0..precision {
        if span > 0.0 && span < RESCALE_BELOW {
            value *= RESCALE_FACTOR;
            span *= RESCALE_FACTOR;
        }
        span /= 2.0;
        if value >= span {
            bits.push(true);
            value -= span;
        } else {
            bits.push(false);
        }
    }
    bits
}
