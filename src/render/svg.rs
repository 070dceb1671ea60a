//! SVG output
//!
//! One 1x1 `<rect>` per tile carrying the tile's classification keys as CSS
//! classes, then one rect per unit whose kind has a [`UnitStyle`]. Colours
//! come from the caller's stylesheet; nothing here knows what a tile looks
//! like.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use super::classify::classify;
use crate::codec::MapData;

pub const GOLD_MINE: u8 = 0x5c;
pub const OIL_PATCH: u8 = 0x5d;

/// How units of one kind are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStyle {
    pub kind: u8,
    pub class: String,
    /// Side length in tiles
    #[serde(default = "default_unit_size")]
    pub size: u16,
}

fn default_unit_size() -> u16 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Prepended to every tile key to form a CSS class name
    pub class_prefix: String,
    pub corner_radius: f32,
    /// Inline `style` attribute of every rect
    pub rect_style: String,
    /// Copied verbatim into the `<style>` element
    pub stylesheet: Option<String>,
    pub units: Vec<UnitStyle>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            class_prefix: "t".into(),
            corner_radius: 0.2,
            rect_style: "stroke:#ffffff;stroke-opacity:1;stroke-width:0.1".into(),
            stylesheet: None,
            units: vec![
                UnitStyle { kind: GOLD_MINE, class: "gold-mine".into(), size: 3 },
                UnitStyle { kind: OIL_PATCH, class: "oil-patch".into(), size: 3 },
            ],
        }
    }
}

impl SvgOptions {
    pub fn unit_style(&self, kind: u8) -> Option<&UnitStyle> {
        self.units.iter().find(|style| style.kind == kind)
    }
}

pub fn render_svg(map: &MapData, options: &SvgOptions) -> String {
    let mut out = String::with_capacity(map.tiles().len() * 160 + 512);
    // writing into a String cannot fail
    let _ = write_svg(&mut out, map, options);
    out
}

pub fn write_svg<W: Write>(out: &mut W, map: &MapData, options: &SvgOptions) -> fmt::Result {
    let (width, height) = (map.width(), map.height());
    writeln!(
        out,
        r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
    )?;

    writeln!(out, "<style>")?;
    if let Some(stylesheet) = &options.stylesheet {
        writeln!(out, "{}", stylesheet.trim_end())?;
    }
    writeln!(out, "</style>")?;

    let prefix = options.class_prefix.as_str();
    for x in 0..width {
        for y in 0..height {
            let Some(code) = map.tile(x, y) else {
                continue;
            };
            write!(out, r#"<rect x="{x}" y="{y}" height="1" width="1" class=""#)?;
            for (i, key) in classify(code).iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write!(out, "{prefix}{key}")?;
            }
            writeln!(
                out,
                r#"" rx="{}" style="{}"/>"#,
                options.corner_radius, options.rect_style
            )?;
        }
    }

    for unit in map.units() {
        let Some(style) = options.unit_style(unit.kind) else {
            continue;
        };
        writeln!(
            out,
            r#"<rect x="{}" y="{}" height="{size}" width="{size}" class="{}" rx="{}" style="{}"/>"#,
            unit.x,
            unit.y,
            style.class,
            options.corner_radius,
            options.rect_style,
            size = style.size,
        )?;
    }

    writeln!(out, "</svg>")
}
