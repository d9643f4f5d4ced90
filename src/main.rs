use geohash_bits::{
    Error, LATITUDE_RANGE, LONGITUDE_RANGE, geohash, geohash_string, to_hash_string,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 経度 0 を手作業で3回二分割する
    let longitude = 0.0;
    let mut bounds = [LONGITUDE_RANGE.min(), LONGITUDE_RANGE.max()];
    let mut bits = Vec::new();
    for _ in 0..3 {
        let midpoint = (bounds[0] + bounds[1]) / 2.0;
        if longitude >= midpoint {
            bits.push(true);
            bounds[0] = midpoint;
        } else {
            bits.push(false);
            bounds[1] = midpoint;
        }
    }
    println!("hand-coded 0.0 -> {}", to_hash_string(&bits));

    let longitudes = [
        -180.0, -169.75, -158.5, -136.0, -91.0, -1.0, 0.0, 90.0, 135.0, 157.5, 168.75, 180.0,
    ];
    for value in longitudes {
        let hash = geohash_string(value, LONGITUDE_RANGE, 5)?;
        println!("lng {:>8} -> {}", value, hash);
    }
    for value in [-90.0, 90.0] {
        let hash = geohash_string(value, LATITUDE_RANGE, 5)?;
        println!("lat {:>8} -> {}", value, hash);
    }

    for (lat, lon, precision) in [
        (-90.0, -180.0, 10),
        (-90.0, 180.0, 10),
        (-90.0, 180.0, 11),
        (90.0, -158.5, 10),
        (90.0, -158.5, 11),
        (90.0, -158.5, 14),
        (90.0, 180.0, 14),
    ] {
        let hash = geohash(lat, lon, precision)?;
        println!("({}, {}) @{} -> {}", lat, lon, precision, hash);
    }

    Ok(())
}
