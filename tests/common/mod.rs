//! Builds small las files in memory.

#![allow(dead_code)]

use las2ply::{Color, point::Format, raw};
use std::{fs, path::Path};

pub struct LasBuilder {
    pub header: raw::Header,
    pub vlrs: Vec<raw::Vlr>,
    pub points: Vec<raw::Point>,
}

impl LasBuilder {
    pub fn new(format: u8) -> LasBuilder {
        let record_length = Format::new(format).map(|format| format.len()).unwrap_or(20);
        LasBuilder {
            header: raw::Header {
                point_data_format_id: format,
                point_data_record_length: record_length,
                ..Default::default()
            },
            vlrs: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn version(mut self, major: u8, minor: u8) -> LasBuilder {
        self.header.version = (major, minor).into();
        self.header.header_size = self.header.version.header_size();
        self
    }

    pub fn scale(mut self, scale: f64) -> LasBuilder {
        self.header.x_scale_factor = scale;
        self.header.y_scale_factor = scale;
        self.header.z_scale_factor = scale;
        self
    }

    pub fn record_length(mut self, record_length: u16) -> LasBuilder {
        self.header.point_data_record_length = record_length;
        self
    }

    pub fn vlr(mut self, data: Vec<u8>) -> LasBuilder {
        self.vlrs.push(raw::Vlr {
            user_id: *b"las2ply tests\0\0\0",
            record_length_after_header: data.len() as u16,
            data,
            ..Default::default()
        });
        self
    }

    pub fn point(mut self, x: i32, y: i32, z: i32) -> LasBuilder {
        self.points.push(raw::Point {
            x,
            y,
            z,
            color: None,
        });
        self
    }

    pub fn colored_point(mut self, x: i32, y: i32, z: i32, color: Color) -> LasBuilder {
        self.points.push(raw::Point {
            x,
            y,
            z,
            color: Some(color),
        });
        self
    }

    /// Fills in the counts and offsets and returns the file's bytes.
    pub fn build(mut self) -> Vec<u8> {
        let vlr_len: u32 = self
            .vlrs
            .iter()
            .map(|vlr| u32::from(raw::Vlr::HEADER_SIZE) + vlr.data.len() as u32)
            .sum();
        self.header.number_of_variable_length_records = self.vlrs.len() as u32;
        self.header.offset_to_point_data = u32::from(self.header.header_size) + vlr_len;
        if self.header.version.minor >= 4 {
            self.header.number_of_point_records = 0;
            self.header.large_file = Some(raw::LargeFile {
                number_of_point_records: self.points.len() as u64,
                ..Default::default()
            });
        } else {
            self.header.number_of_point_records = self.points.len() as u32;
        }

        let mut bytes = Vec::new();
        self.header.write_to(&mut bytes).unwrap();
        for vlr in &self.vlrs {
            vlr.write_to(&mut bytes).unwrap();
        }
        // Unknown formats are written with a format 0 layout so the header can still be built.
        let format = Format::new(self.header.point_data_format_id).unwrap_or_default();
        for point in &self.points {
            point
                .write_to(&mut bytes, format, self.header.point_data_record_length)
                .unwrap();
        }
        bytes
    }

    pub fn write_to(self, path: &Path) {
        fs::write(path, self.build()).unwrap();
    }
}

/// The vertex lines of a ply file, i.e. everything after `end_header`.
pub fn vertex_lines(ply: &str) -> Vec<&str> {
    ply.split_once("end_header\n").unwrap().1.lines().collect()
}

/// The vertex count declared in a ply header.
pub fn declared_vertices(ply: &str) -> usize {
    ply.lines()
        .find_map(|line| line.strip_prefix("element vertex "))
        .unwrap()
        .parse()
        .unwrap()
}
