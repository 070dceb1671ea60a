//! Tile classification keys
//!
//! A tile code is written as 4 lowercase hex digits (zero padded). Each key
//! keeps one contiguous run of those digits and replaces the rest with
//! [`WILDCARD`]:
//!
//! ```text
//! 0x005c -> 0xxx 00xx 005x 005c x05c xx5c xxxc
//! ```
//!
//! Style tables can then match a whole family of tiles (`05xx`) or a single
//! one (`005c`) without listing every code.

use std::fmt;

pub const WILDCARD: u8 = b'x';

/// Fixed digit range `[start, end)` of each key, in output order
const KEY_RANGES: [(usize, usize); 7] = [(0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4)];

/// One 4-character classification key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey([u8; 4]);

impl TileKey {
    pub fn as_str(&self) -> &str {
        // hex digits and the wildcard are ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 7 classification keys of a tile code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKeys([TileKey; 7]);

impl TileKeys {
    pub fn as_array(&self) -> &[TileKey; 7] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(TileKey::as_str)
    }

    /// The key with all 4 digits fixed
    pub fn most_specific(&self) -> &str {
        self.0[3].as_str()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl fmt::Display for TileKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

fn hex_digits(code: u16) -> [u8; 4] {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    [12, 8, 4, 0].map(|shift| HEX[((code >> shift) & 0xf) as usize])
}

pub fn classify(code: u16) -> TileKeys {
    let digits = hex_digits(code);
    TileKeys(KEY_RANGES.map(|(start, end)| {
        let mut key = [WILDCARD; 4];
        key[start..end].copy_from_slice(&digits[start..end]);
        TileKey(key)
    }))
}
