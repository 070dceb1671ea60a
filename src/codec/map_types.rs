use serde::Serialize;

use super::BinaryReader;
use crate::error::Result;

/// Map size in tiles. Always square once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn tile_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn index(self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

/// A placed unit record from the `UNIT` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Unit {
    pub x: u16,
    pub y: u16,
    pub kind: u8,
    pub owner: u8,
    pub resource_factor: u16,
}

impl Unit {
    pub const RECORD_LEN: usize = 8;

    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            x: reader.read_u16_le()?,
            y: reader.read_u16_le()?,
            kind: reader.read_u8()?,
            owner: reader.read_u8()?,
            resource_factor: reader.read_u16_le()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_record() {
        let data = [5, 0, 7, 0, 0x5c, 1, 100, 0];
        let mut reader = BinaryReader::new(&data);
        let unit = Unit::read(&mut reader).unwrap();
        assert_eq!(
            unit,
            Unit { x: 5, y: 7, kind: 0x5c, owner: 1, resource_factor: 100 }
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn test_dimensions_index() {
        let dims = Dimensions { width: 4, height: 4 };
        assert_eq!(dims.tile_count(), 16);
        assert_eq!(dims.index(0, 0), Some(0));
        assert_eq!(dims.index(3, 1), Some(7));
        assert_eq!(dims.index(4, 0), None);
        assert_eq!(dims.index(0, 4), None);
    }
}
