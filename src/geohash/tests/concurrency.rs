#[cfg(test)]
mod tests {
    use crate::{GeoBits, geohash};
    use std::thread;

    #[test]
    fn concurrent_calls_agree() {
        let points: Vec<(f64, f64)> = (0..64)
            .map(|i| (-90.0 + i as f64 * 2.8, -180.0 + i as f64 * 5.6))
            .collect();

        let expected: Vec<GeoBits> = points
            .iter()
            .map(|&(lat, lon)| geohash(lat, lon, 40).unwrap())
            .collect();

        thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        points
                            .iter()
                            .map(|&(lat, lon)| geohash(lat, lon, 40).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
