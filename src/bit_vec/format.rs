use core::fmt;
use std::str::FromStr;

use crate::{bit_vec::GeoBits, error::Error};

impl fmt::Display for GeoBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl GeoBits {
    /// `'1'` と `'0'` の文字列に変換する。長さはビット数と一致する。
    ///
    /// ```
    /// # use geohash_bits::GeoBits;
    /// let bits = GeoBits::from_bools(&[true, false, false]);
    /// assert_eq!(bits.to_bit_string(), "100");
    /// ```
    pub fn to_bit_string(&self) -> String {
        self.to_string()
    }
}

impl FromStr for GeoBits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidBitChar { ch, index }),
            })
            .collect()
    }
}

/// 真偽値のスライスを `'1'` / `'0'` の文字列にする
pub fn to_hash_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
