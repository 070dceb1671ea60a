//! Map assembly
//!
//! Only three sections matter for the decoded map:
//!
//! - `DIM `: width u16, height u16 (mandatory, must be square)
//! - `MTXM`: width * height tile codes, u16 LE, row-major (optional)
//! - `UNIT`: 8-byte records x u16, y u16, kind u8, owner u8,
//!   resource factor u16 (optional)
//!
//! Everything else is validated by the splitter and then ignored.

use serde::Serialize;

use super::map_types::{Dimensions, Unit};
use super::reader::read_u16_le;
use super::section::{split_sections, SectionTable, SectionTag, TagProfile};
use super::writer::BinaryWriter;
use super::BinaryReader;
use crate::error::{Error, Result};
use crate::render::classify::{classify, TileKeys};

/// Parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    pub profile: TagProfile,
}

impl ParseConfig {
    pub fn new(profile: TagProfile) -> Self {
        Self { profile }
    }
}

/// Builder for parsing PUD buffers with a non-default configuration
#[derive(Debug, Clone, Default)]
pub struct MapParser {
    config: ParseConfig,
}

impl MapParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, profile: TagProfile) -> Self {
        self.config.profile = profile;
        self
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn parse(&self, data: &[u8]) -> Result<MapData> {
        MapData::parse_with(data, &self.config)
    }
}

/// Parse map data from raw bytes with the default tag profile
pub fn parse_map_data(data: &[u8]) -> Result<MapData> {
    MapData::parse(data)
}

pub fn decode_dimensions(sections: &SectionTable) -> Result<Dimensions> {
    let dim = sections
        .data(SectionTag::Dim)
        .ok_or(Error::MissingSection(SectionTag::Dim))?;
    let width = read_u16_le(dim, 0)?;
    let height = read_u16_le(dim, 2)?;
    if width != height {
        return Err(Error::NonSquareMap { width, height });
    }
    Ok(Dimensions { width, height })
}

pub fn decode_tile_grid(dimensions: Dimensions, data: Option<&[u8]>) -> Result<Vec<u16>> {
    let Some(data) = data else {
        return Ok(Vec::new());
    };
    let expected = dimensions.tile_count() * 2;
    if data.len() != expected {
        return Err(Error::TileGridSizeMismatch { expected, actual: data.len() });
    }
    Ok(data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

pub fn decode_units(data: Option<&[u8]>) -> Result<Vec<Unit>> {
    let Some(data) = data else {
        return Ok(Vec::new());
    };
    if data.len() % Unit::RECORD_LEN != 0 {
        return Err(Error::UnitRecordSizeMismatch { len: data.len() });
    }

    let mut reader = BinaryReader::new(data);
    let mut units = Vec::with_capacity(data.len() / Unit::RECORD_LEN);
    while !reader.is_empty() {
        let unit = Unit::read(&mut reader)?;
        tracing::debug!(
            x = unit.x,
            y = unit.y,
            kind = unit.kind,
            owner = unit.owner,
            resource_factor = unit.resource_factor,
            "unit"
        );
        units.push(unit);
    }
    Ok(units)
}

/// Decoded PUD map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapData {
    dimensions: Dimensions,
    tiles: Vec<u16>,
    units: Vec<Unit>,
}

impl MapData {
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with(data, &ParseConfig::default())
    }

    pub fn parse_with(data: &[u8], config: &ParseConfig) -> Result<Self> {
        let sections = split_sections(data, config.profile)?;
        Self::from_sections(&sections)
    }

    pub fn from_sections(sections: &SectionTable) -> Result<Self> {
        let dimensions = decode_dimensions(sections)?;
        let tiles = decode_tile_grid(dimensions, sections.data(SectionTag::Mtxm))?;
        let units = decode_units(sections.data(SectionTag::Unit))?;

        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            tiles = tiles.len(),
            units = units.len(),
            sections = sections.len(),
            "parsed map"
        );

        Ok(Self { dimensions, tiles, units })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    /// Row-major tile codes; empty when the map has no `MTXM` section
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn tile(&self, x: u16, y: u16) -> Option<u16> {
        self.dimensions.index(x, y).and_then(|i| self.tiles.get(i).copied())
    }

    pub fn tile_keys(&self, x: u16, y: u16) -> Option<TileKeys> {
        self.tile(x, y).map(classify)
    }

    /// `(x, y, code)` for every tile in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, u16)> + '_ {
        let width = self.dimensions.width as usize;
        self.tiles.iter().enumerate().map(move |(i, &code)| {
            ((i % width) as u16, (i / width) as u16, code)
        })
    }

    /// Encode as a minimal PUD holding `DIM `, `MTXM` (when there are tiles)
    /// and `UNIT`.
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(
            24 + self.tiles.len() * 2 + self.units.len() * Unit::RECORD_LEN,
        );

        let mut dim = BinaryWriter::with_capacity(4);
        dim.write_u16_le(self.dimensions.width);
        dim.write_u16_le(self.dimensions.height);
        writer.write_section(SectionTag::Dim, dim.as_slice());

        if !self.tiles.is_empty() {
            let mut mtxm = BinaryWriter::with_capacity(self.tiles.len() * 2);
            for &code in &self.tiles {
                mtxm.write_u16_le(code);
            }
            writer.write_section(SectionTag::Mtxm, mtxm.as_slice());
        }

        let mut unit = BinaryWriter::with_capacity(self.units.len() * Unit::RECORD_LEN);
        for u in &self.units {
            unit.write_u16_le(u.x);
            unit.write_u16_le(u.y);
            unit.write_u8(u.kind);
            unit.write_u8(u.owner);
            unit.write_u16_le(u.resource_factor);
        }
        writer.write_section(SectionTag::Unit, unit.as_slice());

        writer.into_vec()
    }
}
