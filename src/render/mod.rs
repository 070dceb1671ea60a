pub mod classify;
pub mod svg;

pub use classify::{classify, TileKey, TileKeys, WILDCARD};
pub use svg::{render_svg, write_svg, SvgOptions, UnitStyle};
