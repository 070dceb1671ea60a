//! PUD section splitting
//!
//! A PUD file is a flat run of chunks with no padding and no terminator:
//!
//!   Bytes 0-3:   Tag (4 ASCII bytes, space padded, eg `DIM `)
//!   Bytes 4-7:   Payload length L (u32 LE, header not included)
//!   Bytes 8..:   L bytes of payload
//!
//! The next chunk starts right after the payload. The last payload must end
//! exactly at the end of the buffer.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::reader::read_u32_le;
use crate::error::{Error, Result};

pub const SECTION_HEADER_LEN: usize = 8;

/// Known PUD section tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionTag {
    Type,
    Ver,
    Desc,
    Ownr,
    Era,
    Dim,
    Udta,
    Ugrd,
    Side,
    Sgld,
    Slbr,
    Soil,
    Aipl,
    Mtxm,
    Sqm,
    Oilm,
    Regm,
    Unit,
    Sign,
    Erax,
}

impl SectionTag {
    pub const ALL: [SectionTag; 20] = [
        Self::Type,
        Self::Ver,
        Self::Desc,
        Self::Ownr,
        Self::Era,
        Self::Dim,
        Self::Udta,
        Self::Ugrd,
        Self::Side,
        Self::Sgld,
        Self::Slbr,
        Self::Soil,
        Self::Aipl,
        Self::Mtxm,
        Self::Sqm,
        Self::Oilm,
        Self::Regm,
        Self::Unit,
        Self::Sign,
        Self::Erax,
    ];

    pub const fn as_bytes(self) -> &'static [u8; 4] {
        match self {
            Self::Type => b"TYPE",
            Self::Ver => b"VER ",
            Self::Desc => b"DESC",
            Self::Ownr => b"OWNR",
            Self::Era => b"ERA ",
            Self::Dim => b"DIM ",
            Self::Udta => b"UDTA",
            Self::Ugrd => b"UGRD",
            Self::Side => b"SIDE",
            Self::Sgld => b"SGLD",
            Self::Slbr => b"SLBR",
            Self::Soil => b"SOIL",
            Self::Aipl => b"AIPL",
            Self::Mtxm => b"MTXM",
            Self::Sqm => b"SQM ",
            Self::Oilm => b"OILM",
            Self::Regm => b"REGM",
            Self::Unit => b"UNIT",
            Self::Sign => b"SIGN",
            Self::Erax => b"ERAX",
        }
    }

    pub fn from_bytes(bytes: &[u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_bytes() == bytes)
    }

    pub fn as_str(self) -> &'static str {
        // every tag is plain ASCII
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Which tags a producer is allowed to emit.
///
/// Older converters only know the original 18 sections; later editors add
/// `SIGN` and `ERAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TagProfile {
    Classic,
    #[default]
    Extended,
}

impl TagProfile {
    pub fn accepts(self, tag: SectionTag) -> bool {
        match self {
            Self::Classic => !matches!(tag, SectionTag::Sign | SectionTag::Erax),
            Self::Extended => true,
        }
    }

    pub fn tags(self) -> impl Iterator<Item = SectionTag> {
        SectionTag::ALL.into_iter().filter(move |&tag| self.accepts(tag))
    }
}

/// A section body borrowed from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub tag: SectionTag,
    /// Offset of the section header in the input
    pub offset: usize,
    pub data: &'a [u8],
}

impl RawSection<'_> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Sections of one PUD in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTable<'a> {
    sections: IndexMap<SectionTag, RawSection<'a>>,
}

impl<'a> SectionTable<'a> {
    pub fn get(&self, tag: SectionTag) -> Option<&RawSection<'a>> {
        self.sections.get(&tag)
    }

    pub fn data(&self, tag: SectionTag) -> Option<&'a [u8]> {
        self.sections.get(&tag).map(|s| s.data)
    }

    pub fn contains(&self, tag: SectionTag) -> bool {
        self.sections.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawSection<'a>> {
        self.sections.values()
    }

    pub fn tags(&self) -> impl Iterator<Item = SectionTag> + '_ {
        self.sections.keys().copied()
    }
}

/// Split a PUD buffer into its sections.
pub fn split_sections(data: &[u8], profile: TagProfile) -> Result<SectionTable<'_>> {
    let mut sections = IndexMap::new();
    let mut offset = 0;

    while offset < data.len() {
        let remaining = data.len() - offset;
        if remaining < 4 {
            return Err(Error::TrailingBytes { offset, remaining });
        }

        let mut raw_tag = [0u8; 4];
        raw_tag.copy_from_slice(&data[offset..offset + 4]);
        let tag = SectionTag::from_bytes(&raw_tag)
            .filter(|&tag| profile.accepts(tag))
            .ok_or(Error::MalformedTag { offset, tag: raw_tag })?;

        if sections.contains_key(&tag) {
            return Err(Error::DuplicateSection { tag, offset });
        }

        if remaining < SECTION_HEADER_LEN {
            return Err(Error::TruncatedSection {
                tag,
                offset,
                declared: 4,
                available: remaining - 4,
            });
        }

        let declared = read_u32_le(data, offset + 4)? as usize;
        let start = offset + SECTION_HEADER_LEN;
        let available = data.len() - start;
        let end = match start.checked_add(declared) {
            Some(end) if end <= data.len() => end,
            _ => {
                return Err(Error::TruncatedSection { tag, offset, declared, available });
            }
        };

        tracing::trace!(%tag, offset, len = declared, "section");
        sections.insert(tag, RawSection { tag, offset, data: &data[start..end] });
        offset = end;
    }

    Ok(SectionTable { sections })
}
