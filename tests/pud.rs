use pud_map::codec::{BinaryWriter, SECTION_HEADER_LEN};
use pud_map::{
    classify, parse_map_data, render_svg, split_sections, Dimensions, Error, MapParser,
    SectionTag, SvgOptions, TagProfile, Unit,
};

/// A small but complete map in the section order editors write
fn sample_pud(with_sign: bool) -> Vec<u8> {
    let mut w = BinaryWriter::new();
    w.write_section(SectionTag::Type, b"WAR2 MAP\0\0");
    w.write_section(SectionTag::Ver, &[0x13, 0x00]);
    w.write_section(SectionTag::Desc, &[0; 32]);
    w.write_section(SectionTag::Ownr, &[0x05; 16]);
    w.write_section(SectionTag::Era, &[0x00, 0x00]);
    w.write_section(SectionTag::Dim, &[0x04, 0x00, 0x04, 0x00]);

    let mut mtxm = BinaryWriter::new();
    for i in 0..16u16 {
        mtxm.write_u16_le(0x0050 + i);
    }
    w.write_section(SectionTag::Mtxm, mtxm.as_slice());

    if with_sign {
        w.write_section(SectionTag::Sign, &[0, 0, 0, 0]);
    }

    let mut units = BinaryWriter::new();
    for (x, y, kind, owner, factor) in [(0u16, 0u16, 0x5cu8, 15u8, 100u16), (1, 2, 0x5d, 15, 50), (1, 2, 0x5d, 15, 50)] {
        units.write_u16_le(x);
        units.write_u16_le(y);
        units.write_u8(kind);
        units.write_u8(owner);
        units.write_u16_le(factor);
    }
    w.write_section(SectionTag::Unit, units.as_slice());
    w.into_vec()
}

#[test]
fn full_map_decodes() {
    let data = sample_pud(false);
    let map = parse_map_data(&data).unwrap();

    assert_eq!(map.dimensions(), Dimensions { width: 4, height: 4 });
    assert_eq!(map.tiles().len(), 16);
    assert_eq!(map.tile(3, 3), Some(0x005f));
    assert_eq!(map.tile(1, 0), Some(0x0051));

    // duplicates at the same coordinate are kept, in file order
    assert_eq!(map.units().len(), 3);
    assert_eq!(map.units()[1], map.units()[2]);
    assert_eq!(
        map.units()[0],
        Unit { x: 0, y: 0, kind: 0x5c, owner: 15, resource_factor: 100 }
    );
}

#[test]
fn parsing_is_idempotent() {
    let data = sample_pud(true);
    assert_eq!(parse_map_data(&data).unwrap(), parse_map_data(&data).unwrap());
}

#[test]
fn sections_cover_the_whole_buffer() {
    let data = sample_pud(true);
    let table = split_sections(&data, TagProfile::Extended).unwrap();
    let consumed: usize = table.iter().map(|s| SECTION_HEADER_LEN + s.len()).sum();
    assert_eq!(consumed, data.len());
    assert_eq!(table.len(), 9);
    assert_eq!(table.data(SectionTag::Ver), Some(&[0x13u8, 0x00][..]));
}

#[test]
fn classic_profile_rejects_sign() {
    let data = sample_pud(true);
    let err = MapParser::new()
        .profile(TagProfile::Classic)
        .parse(&data)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedTag { tag, .. } if &tag == b"SIGN"));

    let data = sample_pud(false);
    assert!(MapParser::new().profile(TagProfile::Classic).parse(&data).is_ok());
}

#[test]
fn minimal_map_without_tiles_or_units() {
    let mut w = BinaryWriter::new();
    w.write_section(SectionTag::Dim, &[0x10, 0x00, 0x10, 0x00]);
    let map = parse_map_data(w.as_slice()).unwrap();
    assert_eq!(map.dimensions(), Dimensions { width: 16, height: 16 });
    assert!(map.tiles().is_empty());
    assert!(map.units().is_empty());
    assert_eq!(map.tile_keys(0, 0), None);
}

#[test]
fn encoded_map_parses_back() {
    let map = parse_map_data(&sample_pud(true)).unwrap();
    assert_eq!(parse_map_data(&map.encode()).unwrap(), map);
}

#[test]
fn error_messages() {
    let err = parse_map_data(b"NOPE\0\0\0\0").unwrap_err();
    assert_eq!(err.to_string(), r#"malformed section tag "NOPE" at offset 0"#);

    let err = parse_map_data(b"UNIT\0\0\0\0").unwrap_err();
    assert_eq!(err.to_string(), r#"missing section "DIM ""#);
}

#[test]
fn svg_and_json_outputs() {
    let map = parse_map_data(&sample_pud(false)).unwrap();

    let svg = render_svg(&map, &SvgOptions::default());
    assert_eq!(svg.matches("<rect").count(), 16 + 3);
    assert_eq!(svg.matches(r#"class="gold-mine""#).count(), 1);
    assert_eq!(svg.matches(r#"class="oil-patch""#).count(), 2);
    let classes: Vec<String> = classify(0x005c).iter().map(|k| format!("t{k}")).collect();
    assert!(svg.contains(&format!(r#"class="{}""#, classes.join(" "))));

    let json: serde_json::Value = serde_json::to_value(&map).unwrap();
    assert_eq!(json["dimensions"]["width"], 4);
    assert_eq!(json["tiles"][0], 0x50);
    assert_eq!(json["units"][0]["resource_factor"], 100);
}
