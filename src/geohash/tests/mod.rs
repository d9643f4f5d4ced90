use proptest::prelude::*;

use crate::Interval;

pub mod concurrency;

/// テスト用に、有限で幅が 0 でないランダムな区間を生成する
/// 端点の順序は逆転していることもある
pub fn arb_interval() -> impl Strategy<Value = Interval> {
    (-1.0e6f64..1.0e6, 1.0e-3f64..1.0e6, any::<bool>()).prop_map(|(start, width, reversed)| {
        let end = start + width;
        if reversed {
            Interval::new(end, start).unwrap()
        } else {
            Interval::new(start, end).unwrap()
        }
    })
}

/// 区間と、その区間に含まれる値の組を生成する
pub fn arb_interval_and_value() -> impl Strategy<Value = (Interval, f64)> {
    arb_interval().prop_flat_map(|interval| {
        (Just(interval), interval.min()..=interval.max())
    })
}

/// 区間と、その区間に含まれる2つの値の組を生成する
pub fn arb_interval_and_two_values() -> impl Strategy<Value = (Interval, f64, f64)> {
    arb_interval().prop_flat_map(|interval| {
        (
            Just(interval),
            interval.min()..=interval.max(),
            interval.min()..=interval.max(),
        )
    })
}

/// 地理座標を生成する
pub fn arb_lat_lon() -> impl Strategy<Value = (f64, f64)> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
}
