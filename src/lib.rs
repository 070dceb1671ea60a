//! Warcraft II PUD map reader
//!
//! Decodes the chunked PUD container into map dimensions, the tile grid and
//! placed units, and derives per-tile classification keys so a renderer can
//! style tiles by family without a full tile table.

pub mod codec;
pub mod error;
pub mod render;

pub use error::{Error, Result};
pub use codec::{
    MapData, MapParser, ParseConfig,
    Dimensions, Unit,
    SectionTag, SectionTable, RawSection, TagProfile,
    parse_map_data, split_sections,
};
pub use render::{classify, render_svg, SvgOptions, TileKeys};
