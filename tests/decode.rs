mod common;

use common::LasBuilder;
use las2ply::{Color, Error, Reader, Section, Version};
use std::io::Cursor;

fn reader(bytes: Vec<u8>) -> Reader<Cursor<Vec<u8>>> {
    Reader::new(Cursor::new(bytes)).unwrap()
}

#[test]
fn scale_and_offset() {
    let mut builder = LasBuilder::new(0).scale(0.01).point(12345, -12345, 0);
    builder.header.z_offset = 100.;
    let cloud = reader(builder.build()).read_cloud().unwrap();
    let point = cloud.points()[0];
    assert!((point.x - 123.45).abs() < 1e-9);
    assert!((point.y + 123.45).abs() < 1e-9);
    assert_eq!(100., point.z);
}

#[test]
fn every_version() {
    for minor in 0..=4 {
        let bytes = LasBuilder::new(0)
            .version(1, minor)
            .point(1000, 2000, 3000)
            .build();
        let reader = reader(bytes);
        assert_eq!(Version::new(1, minor), reader.header().version());
        assert_eq!(1, reader.header().number_of_points());
        let cloud = reader.read_cloud().unwrap();
        assert_eq!(1., cloud.points()[0].x, "las 1.{}", minor);
    }
}

#[test]
fn every_format() {
    for code in 0..=10 {
        let color = Color::new(100, 200, 300);
        let mut builder = LasBuilder::new(code).version(1, 4).scale(1.);
        let has_color = matches!(code, 2 | 3 | 5 | 7 | 8 | 10);
        builder = if has_color {
            builder.colored_point(1, 2, 3, color)
        } else {
            builder.point(1, 2, 3)
        };
        let cloud = reader(builder.build()).read_cloud().unwrap();
        assert_eq!(has_color, cloud.has_color(), "format {}", code);
        let point = cloud.points()[0];
        assert_eq!(3., point.z, "format {}", code);
        assert_eq!(has_color.then_some(color), point.color, "format {}", code);
    }
}

#[test]
fn vlrs_are_skipped() {
    let bytes = LasBuilder::new(2)
        .scale(1.)
        .vlr(vec![0xff; 10])
        .vlr(Vec::new())
        .vlr(b"LASF LASF LASF".to_vec())
        .colored_point(5, 6, 7, Color::new(1, 2, 3))
        .build();
    let reader = reader(bytes);
    let header = reader.header();
    assert_eq!(3, header.vlrs().len());
    assert_eq!("las2ply tests", header.vlrs()[0].user_id);
    assert_eq!(227 + 3 * 54 + 24, header.offset_to_point_data());
    let cloud = reader.read_cloud().unwrap();
    assert_eq!(Some(Color::new(1, 2, 3)), cloud.points()[0].color);
    assert_eq!(5., cloud.points()[0].x);
}

#[test]
fn gap_between_vlrs_and_points() {
    let mut builder = LasBuilder::new(0).scale(1.).vlr(vec![1, 2, 3]);
    builder.header.padding = vec![0; 6];
    builder.header.header_size += 6;
    let mut bytes = builder.point(42, 0, 0).build();
    // Point data starts 4 bytes further on than the header and vlrs need.
    let offset = u32::from_le_bytes([bytes[96], bytes[97], bytes[98], bytes[99]]) + 4;
    bytes[96..100].copy_from_slice(&offset.to_le_bytes());
    let end = bytes.len() - 20;
    let _ = bytes.splice(end..end, [0xaa; 4]);

    let cloud = reader(bytes).read_cloud().unwrap();
    assert_eq!(42., cloud.points()[0].x);
}

#[test]
fn extra_bytes() {
    let bytes = LasBuilder::new(3)
        .scale(1.)
        .record_length(34 + 16)
        .colored_point(1, 1, 1, Color::new(9, 9, 9))
        .colored_point(2, 2, 2, Color::new(8, 8, 8))
        .build();
    let reader = reader(bytes);
    assert_eq!(50, reader.header().point_data_record_length());
    let cloud = reader.read_cloud().unwrap();
    assert_eq!(2, cloud.len());
    assert_eq!(2., cloud.points()[1].x);
    assert_eq!(Some(Color::new(8, 8, 8)), cloud.points()[1].color);
}

#[test]
fn large_file_point_count() {
    let bytes = LasBuilder::new(6)
        .version(1, 4)
        .point(1, 0, 0)
        .point(2, 0, 0)
        .build();
    let reader = reader(bytes);
    assert_eq!(2, reader.header().number_of_points());
    assert_eq!(2, reader.read_cloud().unwrap().len());
}

#[test]
fn record_length_too_short() {
    let bytes = LasBuilder::new(2).record_length(20).point(0, 0, 0).build();
    assert!(matches!(
        Reader::new(Cursor::new(bytes)),
        Err(Error::InvalidPointDataRecordLength { len: 20, .. })
    ));
}

#[test]
fn unsupported_version() {
    let mut bytes = LasBuilder::new(0).build();
    bytes[24] = 2;
    assert!(matches!(
        Reader::new(Cursor::new(bytes)),
        Err(Error::UnsupportedVersion(version)) if version == Version::new(2, 0)
    ));
}

#[test]
fn truncated_vlr() {
    let mut bytes = LasBuilder::new(0).vlr(vec![0; 100]).build();
    bytes.truncate(227 + 54 + 50);
    assert!(matches!(
        Reader::new(Cursor::new(bytes)),
        Err(Error::TruncatedData {
            section: Section::Vlr(0),
            end: 381,
            available: 331,
        })
    ));
}

#[test]
fn points_iterator_stops_at_the_declared_count() {
    let mut bytes = LasBuilder::new(0).point(1, 0, 0).build();
    bytes.extend([0; 20]);
    let mut reader = reader(bytes);
    let points: Vec<_> = reader.points().collect::<Result<_, _>>().unwrap();
    assert_eq!(1, points.len());
}

#[test]
fn project_id() {
    let mut builder = LasBuilder::new(0);
    builder.header.guid = [1, 0, 0, 0, 2, 0, 3, 0, 4, 5, 6, 7, 8, 9, 10, 11];
    let reader = reader(builder.build());
    assert_eq!(
        "00000001-0002-0003-0405-060708090a0b",
        reader.header().guid().to_string()
    );
}
