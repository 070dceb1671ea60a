pub mod reader;
pub mod writer;
pub mod section;
pub mod map_types;
pub mod map_data;

pub use reader::{BinaryReader, read_u8, read_u16_le, read_u32_le};
pub use writer::BinaryWriter;
pub use section::{RawSection, SectionTable, SectionTag, TagProfile, split_sections, SECTION_HEADER_LEN};
pub use map_types::{Dimensions, Unit};
pub use map_data::{
    MapData, MapParser, ParseConfig,
    decode_dimensions, decode_tile_grid, decode_units,
    parse_map_data,
};
