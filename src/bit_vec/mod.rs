pub mod format;

use std::cmp::Ordering;

/// ジオハッシュのビット列を保持する構造体
///
/// 先頭のビットを最上位として `u8` に詰めて保持する。長さはビット単位で管理し、
/// 最後のバイトの余りビットは常に 0 に保たれる。
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub struct GeoBits {
    bytes: Vec<u8>,
    len: usize,
}

impl GeoBits {
    /// 空の GeoBits を生成する
    pub fn new() -> Self {
        GeoBits {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// `bits` ビット分の領域を確保した空の GeoBits を生成する
    pub fn with_capacity(bits: usize) -> Self {
        GeoBits {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// 末尾に1ビット追加する
    pub fn push(&mut self, bit: bool) {
        let shift = 7 - (self.len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            // 直前で push 済みなので末尾は必ず存在する
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << shift;
            }
        }
        self.len += 1;
    }

    /// `index` 番目のビットを返す。範囲外なら `None`
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 先頭から順にビットを返すイテレータ
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
    }

    /// 最上位ビット詰めのバイト列。末尾の余りビットは 0
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }

    pub fn from_bools(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }
}

impl FromIterator<bool> for GeoBits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = GeoBits::with_capacity(iter.size_hint().0);
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl Extend<bool> for GeoBits {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl PartialOrd for GeoBits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// ビット列としての辞書式順序。一方が他方の接頭辞なら短い方が小さい。
impl Ord for GeoBits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut bits = GeoBits::new();
        for bit in [true, false, true, true, false, false, false, true, true] {
            bits.push(bit);
        }
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1011_0001, 0b1000_0000]);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(8), Some(true));
        assert_eq!(bits.get(9), None);
    }

    #[test]
    fn empty() {
        let bits = GeoBits::new();
        assert!(bits.is_empty());
        assert_eq!(bits.iter().count(), 0);
        assert_eq!(bits.as_bytes(), &[] as &[u8]);
    }

    #[test]
    fn bools_conversion() {
        let src = [false, true, true, false, true];
        let bits = GeoBits::from_bools(&src);
        assert_eq!(bits.to_bools(), src);
    }

    #[test]
    fn length_is_part_of_identity() {
        // 末尾の 0 はパディングと区別される
        let short = GeoBits::from_bools(&[true]);
        let long = GeoBits::from_bools(&[true, false]);
        assert_ne!(short, long);
        assert!(short < long);
    }

    #[test]
    fn lexicographic_order() {
        let a = GeoBits::from_bools(&[false, true, true, true, true]);
        let b = GeoBits::from_bools(&[true, false, false, false, false]);
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
